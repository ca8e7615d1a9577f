//! Recent server activity (`GET /api/logs`).

use ffgz_states::{Command, CommandFuture, CommandSnapshot, StateCtx, Updater};

use crate::BusinessConfig;
use crate::api;
use crate::macros::snapshot_compute;
use crate::model::LogEntry;
use crate::table::LoadStatus;

#[derive(Debug, Clone, Default)]
pub struct LogsCompute {
    pub entries: Vec<LogEntry>,
    pub status: LoadStatus,
}

snapshot_compute!(LogsCompute);

#[derive(Debug, Default)]
pub struct RefreshLogsCommand;

impl Command for RefreshLogsCommand {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture {
        let api_url = snap.state::<BusinessConfig>().api_url().to_string();
        let previous = snap.compute::<LogsCompute>().entries.clone();

        Box::pin(async move {
            updater.set(LogsCompute {
                entries: previous.clone(),
                status: LoadStatus::Loading,
            });
            let result = api::list_logs(&api_url).await;
            let compute = match result {
                Ok(entries) => LogsCompute {
                    entries,
                    status: LoadStatus::Loaded,
                },
                Err(err) => {
                    log::error!("{err}: {}", err.detail);
                    LogsCompute {
                        entries: previous,
                        status: LoadStatus::Failed(err),
                    }
                }
            };
            updater.set(compute);
        })
    }
}

pub fn entries(ctx: &StateCtx) -> &[LogEntry] {
    ctx.cached::<LogsCompute>()
        .map(|logs| logs.entries.as_slice())
        .unwrap_or_default()
}

pub fn refresh(ctx: &mut StateCtx) {
    ctx.enqueue_command::<RefreshLogsCommand>();
}

pub fn register(ctx: &mut StateCtx) {
    ctx.record_compute(LogsCompute::default());
    ctx.record_command(RefreshLogsCommand);
}
