use std::fmt::Debug;
use std::future::Future;

use crate::api::ApiResult;

/// Outcome of a sequential bulk submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkSummary {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl BulkSummary {
    pub fn any_succeeded(&self) -> bool {
        self.succeeded > 0
    }
}

/// Submit `items` one at a time, awaiting each call before the next.
///
/// A failed item is logged and counted; the loop always runs to the end.
pub async fn submit_sequentially<T, R, F, Fut>(items: Vec<T>, mut submit: F) -> BulkSummary
where
    T: Debug,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = ApiResult<R>>,
{
    let mut summary = BulkSummary::default();
    for item in items {
        summary.attempted += 1;
        let label = format!("{item:?}");
        match submit(item).await {
            Ok(_) => summary.succeeded += 1,
            Err(err) => {
                summary.failed += 1;
                log::warn!("{err} ({}): {label}", err.detail);
            }
        }
    }
    log::info!(
        "Bulk submit finished: {}/{} succeeded",
        summary.succeeded,
        summary.attempted
    );
    summary
}
