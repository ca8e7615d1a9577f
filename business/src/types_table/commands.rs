//! Type table inputs, result caches and the commands that fill them.
//!
//! The controller writes an `*Input` state, enqueues the matching command and
//! remembers the request id. Each command echoes that id in its compute so
//! the controller can react to the outcome once. Commands that reload the list
//! afterwards carry a separate `reload_id` for that reload.

use ffgz_states::{Command, CommandFuture, CommandSnapshot, Updater};

use crate::BusinessConfig;
use crate::api;
use crate::bulk::{BulkSummary, submit_sequentially};
use crate::macros::{list_compute, snapshot_compute, snapshot_state};
use crate::model::TypeRecord;
use crate::table::{LoadStatus, RequestState};

/// Keyword of the last server query, reused by every reload.
#[derive(Debug, Clone, Default)]
pub struct TypeListInput {
    pub request_id: u64,
    pub keyword: String,
}

#[derive(Debug, Clone, Default)]
pub struct TypeListCompute {
    pub request_id: u64,
    pub records: Vec<TypeRecord>,
    pub status: LoadStatus,
}

#[derive(Debug, Clone, Default)]
pub struct SaveTypesInput {
    pub request_id: u64,
    pub reload_id: u64,
    pub records: Vec<TypeRecord>,
}

#[derive(Debug, Clone, Default)]
pub struct SaveTypesCompute {
    pub request_id: u64,
    pub state: RequestState<BulkSummary>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTypeInput {
    pub request_id: u64,
    pub reload_id: u64,
    pub id: i64,
    pub record: TypeRecord,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTypeCompute {
    pub request_id: u64,
    pub state: RequestState<()>,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteTypesInput {
    pub request_id: u64,
    pub reload_id: u64,
    pub ids: Vec<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteTypesCompute {
    pub request_id: u64,
    pub state: RequestState<usize>,
}

snapshot_state!(TypeListInput, SaveTypesInput, UpdateTypeInput, DeleteTypesInput);
snapshot_compute!(SaveTypesCompute, UpdateTypeCompute, DeleteTypesCompute);
list_compute!(TypeListCompute);

struct ListContext {
    api_url: String,
    keyword: String,
    request_id: u64,
    previous: Vec<TypeRecord>,
}

impl ListContext {
    fn from_snapshot(snap: &CommandSnapshot) -> Self {
        let input = snap.state::<TypeListInput>();
        Self {
            api_url: snap.state::<BusinessConfig>().api_url().to_string(),
            keyword: input.keyword.clone(),
            request_id: input.request_id,
            previous: snap.compute::<TypeListCompute>().records.clone(),
        }
    }

    /// Same keyword, reported under the follow-up reload id.
    fn reload(snap: &CommandSnapshot, reload_id: u64) -> Self {
        Self {
            request_id: reload_id,
            ..Self::from_snapshot(snap)
        }
    }

    /// Fetch the list. On failure the previously loaded records stay visible.
    async fn fetch(self) -> TypeListCompute {
        let result = api::list_types(&self.api_url, &self.keyword).await;
        match result {
            Ok(records) => {
                log::info!("Loaded {} types for {:?}", records.len(), self.keyword);
                TypeListCompute {
                    request_id: self.request_id,
                    records,
                    status: LoadStatus::Loaded,
                }
            }
            Err(err) => {
                log::error!("{err}: {}", err.detail);
                TypeListCompute {
                    request_id: self.request_id,
                    records: self.previous,
                    status: LoadStatus::Failed(err),
                }
            }
        }
    }
}

/// `GET /api/types?q=` with the remembered keyword.
#[derive(Debug, Default)]
pub struct RefreshTypesCommand;

impl Command for RefreshTypesCommand {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture {
        let list = ListContext::from_snapshot(&snap);
        Box::pin(async move {
            updater.set(TypeListCompute {
                request_id: list.request_id,
                records: list.previous.clone(),
                status: LoadStatus::Loading,
            });
            updater.set(list.fetch().await);
        })
    }
}

/// Creates every record with a model, one request at a time, then reloads
/// when at least one create succeeded.
#[derive(Debug, Default)]
pub struct SaveTypesCommand;

impl Command for SaveTypesCommand {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture {
        let input = snap.state::<SaveTypesInput>().clone();
        let list = ListContext::reload(&snap, input.reload_id);

        Box::pin(async move {
            let request_id = input.request_id;
            updater.set(SaveTypesCompute {
                request_id,
                state: RequestState::Pending,
            });

            let total = input.records.len();
            let payloads: Vec<_> = input
                .records
                .iter()
                .filter(|record| !record.model.trim().is_empty())
                .map(TypeRecord::payload)
                .collect();
            if payloads.len() < total {
                log::debug!("Skipping {} records without a model", total - payloads.len());
            }

            let api_url = list.api_url.clone();
            let summary = submit_sequentially(payloads, |payload| {
                let api_url = api_url.clone();
                async move { api::create_type(&api_url, &payload).await }
            })
            .await;

            if summary.any_succeeded() {
                updater.set(list.fetch().await);
            }
            updater.set(SaveTypesCompute {
                request_id,
                state: RequestState::Done(summary),
            });
        })
    }
}

#[derive(Debug, Default)]
pub struct UpdateTypeCommand;

impl Command for UpdateTypeCommand {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture {
        let input = snap.state::<UpdateTypeInput>().clone();
        let list = ListContext::reload(&snap, input.reload_id);

        Box::pin(async move {
            let request_id = input.request_id;
            updater.set(UpdateTypeCompute {
                request_id,
                state: RequestState::Pending,
            });

            let payload = input.record.payload();
            let result = api::update_type(&list.api_url, input.id, &payload).await;
            let state = match result {
                Ok(_) => {
                    log::info!("Updated type {} ({})", input.id, payload.model);
                    updater.set(list.fetch().await);
                    RequestState::Done(())
                }
                Err(err) => {
                    log::error!("{err}: {}", err.detail);
                    RequestState::Failed(err)
                }
            };
            updater.set(UpdateTypeCompute { request_id, state });
        })
    }
}

#[derive(Debug, Default)]
pub struct DeleteTypesCommand;

impl Command for DeleteTypesCommand {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture {
        let input = snap.state::<DeleteTypesInput>().clone();
        let list = ListContext::reload(&snap, input.reload_id);

        Box::pin(async move {
            let request_id = input.request_id;
            updater.set(DeleteTypesCompute {
                request_id,
                state: RequestState::Pending,
            });

            let result = api::bulk_delete_types(&list.api_url, &input.ids).await;
            let state = match result {
                Ok(response) => {
                    log::info!("Deleted {} types", response.deleted);
                    updater.set(list.fetch().await);
                    RequestState::Done(response.deleted)
                }
                Err(err) => {
                    log::error!("{err}: {}", err.detail);
                    RequestState::Failed(err)
                }
            };
            updater.set(DeleteTypesCompute { request_id, state });
        })
    }
}
