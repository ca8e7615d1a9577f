//! Data table inputs, result caches and commands.

use ffgz_states::{Command, CommandFuture, CommandSnapshot, Updater};

use crate::BusinessConfig;
use crate::api;
use crate::bulk::{BulkSummary, submit_sequentially};
use crate::macros::{list_compute, snapshot_compute, snapshot_state};
use crate::model::DataRow;
use crate::table::{LoadStatus, RequestState};

#[derive(Debug, Clone, Default)]
pub struct DataListInput {
    pub request_id: u64,
}

#[derive(Debug, Clone, Default)]
pub struct DataListCompute {
    pub request_id: u64,
    pub rows: Vec<DataRow>,
    pub status: LoadStatus,
}

#[derive(Debug, Clone, Default)]
pub struct UploadDataInput {
    pub request_id: u64,
    /// Id of the reload that follows a successful upload.
    pub reload_id: u64,
    pub rows: Vec<DataRow>,
}

#[derive(Debug, Clone, Default)]
pub struct UploadDataCompute {
    pub request_id: u64,
    pub state: RequestState<BulkSummary>,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteDataInput {
    pub request_id: u64,
    pub reload_id: u64,
    pub ids: Vec<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteDataCompute {
    pub request_id: u64,
    pub state: RequestState<usize>,
}

snapshot_state!(DataListInput, UploadDataInput, DeleteDataInput);
snapshot_compute!(UploadDataCompute, DeleteDataCompute);
list_compute!(DataListCompute);

fn api_url(snap: &CommandSnapshot) -> String {
    snap.state::<BusinessConfig>().api_url().to_string()
}

/// Loads every data row; filtering happens client side.
async fn fetch_rows(api_url: &str, request_id: u64, previous: Vec<DataRow>) -> DataListCompute {
    let result = api::list_data(api_url, "").await;
    match result {
        Ok(rows) => {
            log::info!("Loaded {} data rows", rows.len());
            DataListCompute {
                request_id,
                rows,
                status: LoadStatus::Loaded,
            }
        }
        Err(err) => {
            log::error!("{err}: {}", err.detail);
            DataListCompute {
                request_id,
                rows: previous,
                status: LoadStatus::Failed(err),
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct RefreshDataCommand;

impl Command for RefreshDataCommand {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture {
        let api_url = api_url(&snap);
        let request_id = snap.state::<DataListInput>().request_id;
        let previous = snap.compute::<DataListCompute>().rows.clone();

        Box::pin(async move {
            updater.set(DataListCompute {
                request_id,
                rows: previous.clone(),
                status: LoadStatus::Loading,
            });
            updater.set(fetch_rows(&api_url, request_id, previous).await);
        })
    }
}

/// Creates the parsed rows one by one; reloads when any create succeeded.
#[derive(Debug, Default)]
pub struct UploadDataCommand;

impl Command for UploadDataCommand {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture {
        let api_url = api_url(&snap);
        let input = snap.state::<UploadDataInput>().clone();
        let previous = snap.compute::<DataListCompute>().rows.clone();

        Box::pin(async move {
            let request_id = input.request_id;
            updater.set(UploadDataCompute {
                request_id,
                state: RequestState::Pending,
            });

            let payloads = input.rows.iter().map(DataRow::payload).collect();
            let summary = submit_sequentially(payloads, |payload| {
                let api_url = api_url.clone();
                async move { api::create_data(&api_url, &payload).await }
            })
            .await;

            if summary.any_succeeded() {
                updater.set(fetch_rows(&api_url, input.reload_id, previous).await);
            }
            updater.set(UploadDataCompute {
                request_id,
                state: RequestState::Done(summary),
            });
        })
    }
}

#[derive(Debug, Default)]
pub struct DeleteDataCommand;

impl Command for DeleteDataCommand {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture {
        let api_url = api_url(&snap);
        let input = snap.state::<DeleteDataInput>().clone();
        let previous = snap.compute::<DataListCompute>().rows.clone();

        Box::pin(async move {
            let request_id = input.request_id;
            updater.set(DeleteDataCompute {
                request_id,
                state: RequestState::Pending,
            });

            let result = api::bulk_delete_data(&api_url, &input.ids).await;
            let state = match result {
                Ok(response) => {
                    log::info!("Deleted {} data rows", response.deleted);
                    updater.set(fetch_rows(&api_url, input.reload_id, previous).await);
                    RequestState::Done(response.deleted)
                }
                Err(err) => {
                    log::error!("{err}: {}", err.detail);
                    RequestState::Failed(err)
                }
            };
            updater.set(DeleteDataCompute { request_id, state });
        })
    }
}
