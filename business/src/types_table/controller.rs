//! User actions on the type table.
//!
//! Each function is one UI event: it reads and writes [`TypeTableState`],
//! and when the action needs the server it fills an input state and queues a
//! command. [`poll`] turns finished commands into UI changes and must run
//! after every `sync_computes`.

use ffgz_states::StateCtx;

use super::commands::{
    DeleteTypesCommand, DeleteTypesCompute, DeleteTypesInput, RefreshTypesCommand,
    SaveTypesCommand, SaveTypesCompute, SaveTypesInput, TypeListCompute, TypeListInput,
    UpdateTypeCommand, UpdateTypeCompute, UpdateTypeInput,
};
use super::state::{AddTypeDialog, EditTypeDialog, TypeForm, TypeTableState};
use crate::import::parse_type_file;
use crate::model::TypeRecord;
use crate::numeric::format_optional;
use crate::table::{DeletePress, ImportStatus, LoadStatus, Notice, PendingDelete, RequestState};

pub const MSG_SELECT_TO_DELETE: &str = "Select records to delete";
pub const MSG_MISSING_IDS: &str = "The selected records have no id and cannot be deleted";
pub const MSG_MODEL_REQUIRED: &str = "Enter a damper model";
pub const MSG_NOTHING_TO_SAVE: &str = "Nothing to save";

/// Records of the last successful load.
pub fn loaded_types(ctx: &StateCtx) -> &[TypeRecord] {
    ctx.cached::<TypeListCompute>()
        .map(|list| list.records.as_slice())
        .unwrap_or_default()
}

pub fn list_status(ctx: &StateCtx) -> LoadStatus {
    ctx.cached::<TypeListCompute>()
        .map(|list| list.status.clone())
        .unwrap_or_default()
}

/// Reload with `keyword`, which becomes the remembered query.
fn reload(ctx: &mut StateCtx, keyword: String) {
    let request_id = ctx.state_mut::<TypeTableState>().next_request();
    ctx.update::<TypeListInput>(|input| {
        input.request_id = request_id;
        input.keyword = keyword;
    });
    ctx.update::<TypeTableState>(|state| {
        state.awaiting_list = Some(request_id);
        state.delete_mode.clear_checks();
    });
    ctx.enqueue_command::<RefreshTypesCommand>();
}

/// Initial load with an empty keyword.
pub fn load_types(ctx: &mut StateCtx) {
    reload(ctx, String::new());
}

/// Server-side search with the trimmed search box text.
pub fn search_types(ctx: &mut StateCtx) {
    let keyword = ctx.state::<TypeTableState>().search.trim().to_owned();
    log::debug!("Searching types for {keyword:?}");
    reload(ctx, keyword);
}

fn all_rows(ctx: &StateCtx) -> Vec<usize> {
    (0..loaded_types(ctx).len()).collect()
}

pub fn press_delete(ctx: &mut StateCtx) {
    let visible = all_rows(ctx);
    let press = ctx
        .state_mut::<TypeTableState>()
        .delete_mode
        .press(&visible);

    let rows = match press {
        DeletePress::Entered => return,
        DeletePress::NothingSelected => {
            ctx.state_mut::<TypeTableState>().notice = Some(Notice::info(MSG_SELECT_TO_DELETE));
            return;
        }
        DeletePress::Selected(rows) => rows,
    };

    let records = loaded_types(ctx);
    let selected: Vec<(i64, &TypeRecord)> = rows
        .iter()
        .filter_map(|row| records.get(*row))
        .filter_map(|record| record.id.map(|id| (id, record)))
        .collect();
    if selected.is_empty() {
        ctx.state_mut::<TypeTableState>().notice = Some(Notice::info(MSG_MISSING_IDS));
        return;
    }
    let (ids, lines): (Vec<i64>, Vec<String>) = selected
        .iter()
        .map(|(id, record)| {
            let line = format!(
                "Model: {}  Load: {}  Damp: {}",
                record.model,
                format_optional(record.load),
                format_optional(record.damp)
            );
            (*id, line)
        })
        .unzip();

    ctx.state_mut::<TypeTableState>().pending_delete = Some(PendingDelete { ids, lines });
}

pub fn toggle_row(ctx: &mut StateCtx, row: usize) {
    ctx.state_mut::<TypeTableState>().delete_mode.toggle(row);
}

pub fn set_all_checked(ctx: &mut StateCtx, checked: bool) {
    let visible = all_rows(ctx);
    ctx.state_mut::<TypeTableState>()
        .delete_mode
        .select_all(&visible, checked);
}

pub fn confirm_delete(ctx: &mut StateCtx) {
    let Some(pending) = ctx.state_mut::<TypeTableState>().pending_delete.take() else {
        return;
    };
    let state = ctx.state_mut::<TypeTableState>();
    let request_id = state.next_request();
    let reload_id = state.next_request();
    ctx.update::<DeleteTypesInput>(|input| {
        input.request_id = request_id;
        input.reload_id = reload_id;
        input.ids = pending.ids;
    });
    ctx.state_mut::<TypeTableState>().awaiting_delete = Some(request_id);
    ctx.enqueue_command::<DeleteTypesCommand>();
}

/// Declining keeps the mode and the selection.
pub fn cancel_delete(ctx: &mut StateCtx) {
    ctx.state_mut::<TypeTableState>().pending_delete = None;
}

pub fn exit_delete_mode(ctx: &mut StateCtx) {
    ctx.state_mut::<TypeTableState>().delete_mode.exit();
}

pub fn open_edit(ctx: &mut StateCtx, row: usize) {
    let Some(record) = loaded_types(ctx).get(row).cloned() else {
        return;
    };
    let state = ctx.state_mut::<TypeTableState>();
    match record.id {
        Some(id) => {
            state.edit = Some(EditTypeDialog {
                id,
                form: TypeForm::from_record(&record),
                saving: None,
            });
        }
        None => state.notice = Some(Notice::error("This record has no id and cannot be edited")),
    }
}

pub fn close_edit(ctx: &mut StateCtx) {
    ctx.state_mut::<TypeTableState>().edit = None;
}

pub fn save_edit(ctx: &mut StateCtx) {
    let Some(edit) = ctx.state::<TypeTableState>().edit.clone() else {
        return;
    };
    if edit.saving.is_some() {
        return;
    }
    let record = edit.form.to_record();
    if record.model.is_empty() {
        ctx.state_mut::<TypeTableState>().notice = Some(Notice::error(MSG_MODEL_REQUIRED));
        return;
    }

    let state = ctx.state_mut::<TypeTableState>();
    let request_id = state.next_request();
    let reload_id = state.next_request();
    ctx.update::<UpdateTypeInput>(|input| {
        input.request_id = request_id;
        input.reload_id = reload_id;
        input.id = edit.id;
        input.record = record;
    });
    if let Some(edit) = ctx.state_mut::<TypeTableState>().edit.as_mut() {
        edit.saving = Some(request_id);
    }
    ctx.enqueue_command::<UpdateTypeCommand>();
}

pub fn open_add(ctx: &mut StateCtx) {
    ctx.state_mut::<TypeTableState>().add = AddTypeDialog {
        open: true,
        ..AddTypeDialog::default()
    };
}

pub fn close_add(ctx: &mut StateCtx) {
    ctx.state_mut::<TypeTableState>().add = AddTypeDialog::default();
}

/// Parse a picked or dropped file into staged rows. A failed parse keeps the
/// previously staged rows.
pub fn stage_import_file(ctx: &mut StateCtx, name: &str, bytes: &[u8]) {
    let parsed = parse_type_file(name, bytes);
    let add = &mut ctx.state_mut::<TypeTableState>().add;
    match parsed {
        Ok(records) => {
            add.status = ImportStatus::Parsed {
                file: name.to_owned(),
                count: records.len(),
            };
            add.staged = records;
        }
        Err(err) => {
            log::warn!("Import of {name} failed: {err}");
            add.status = ImportStatus::Failed(err.to_string());
        }
    }
}

/// Submit the manual record (when filled) plus every staged row.
pub fn save_add(ctx: &mut StateCtx) {
    let add = &ctx.state::<TypeTableState>().add;
    if add.saving.is_some() {
        return;
    }
    let records: Vec<TypeRecord> = add
        .manual_record()
        .into_iter()
        .chain(add.staged.iter().cloned())
        .collect();
    if records.is_empty() {
        ctx.state_mut::<TypeTableState>().notice = Some(Notice::info(MSG_NOTHING_TO_SAVE));
        return;
    }

    let state = ctx.state_mut::<TypeTableState>();
    let request_id = state.next_request();
    let reload_id = state.next_request();
    ctx.update::<SaveTypesInput>(|input| {
        input.request_id = request_id;
        input.reload_id = reload_id;
        input.records = records;
    });
    ctx.state_mut::<TypeTableState>().add.saving = Some(request_id);
    ctx.enqueue_command::<SaveTypesCommand>();
}

pub fn dismiss_notice(ctx: &mut StateCtx) {
    ctx.state_mut::<TypeTableState>().notice = None;
}

/// Apply finished command results to the table state.
pub fn poll(ctx: &mut StateCtx) {
    poll_list(ctx);
    poll_save(ctx);
    poll_update(ctx);
    poll_delete(ctx);
}

fn settled<T: Clone>(waiting: Option<u64>, request_id: u64, state: &RequestState<T>) -> Option<RequestState<T>> {
    (waiting == Some(request_id) && state.is_settled()).then(|| state.clone())
}

fn poll_list(ctx: &mut StateCtx) {
    let Some(list) = ctx.cached::<TypeListCompute>() else {
        return;
    };
    let request_id = list.request_id;
    let status = list.status.clone();
    let state = ctx.state_mut::<TypeTableState>();
    // checks are row indices into the shown list
    if status == LoadStatus::Loaded && state.shown_list != request_id {
        state.shown_list = request_id;
        state.delete_mode.clear_checks();
    }
    if state.awaiting_list != Some(request_id) {
        return;
    }
    match status {
        LoadStatus::Loaded => state.awaiting_list = None,
        LoadStatus::Failed(err) => {
            state.awaiting_list = None;
            state.notice = Some(Notice::error(err.message()));
        }
        LoadStatus::Idle | LoadStatus::Loading => {}
    }
}

fn poll_save(ctx: &mut StateCtx) {
    let waiting = ctx.state::<TypeTableState>().add.saving;
    let Some(result) = ctx
        .cached::<SaveTypesCompute>()
        .and_then(|c| settled(waiting, c.request_id, &c.state))
    else {
        return;
    };
    let state = ctx.state_mut::<TypeTableState>();
    state.add.saving = None;
    if let RequestState::Done(summary) = result {
        state.add = AddTypeDialog::default();
        state.delete_mode.clear_checks();
        let mut message = format!(
            "Saved {} of {} records",
            summary.succeeded, summary.attempted
        );
        if summary.failed > 0 {
            message.push_str(&format!(", {} failed", summary.failed));
        }
        state.notice = Some(Notice::info(message));
    }
}

fn poll_update(ctx: &mut StateCtx) {
    let waiting = ctx
        .state::<TypeTableState>()
        .edit
        .as_ref()
        .and_then(|edit| edit.saving);
    let Some(result) = ctx
        .cached::<UpdateTypeCompute>()
        .and_then(|c| settled(waiting, c.request_id, &c.state))
    else {
        return;
    };
    let state = ctx.state_mut::<TypeTableState>();
    match result {
        RequestState::Done(()) => {
            state.edit = None;
            state.delete_mode.clear_checks();
        }
        RequestState::Failed(err) => {
            if let Some(edit) = state.edit.as_mut() {
                edit.saving = None;
            }
            state.notice = Some(Notice::error(err.message()));
        }
        RequestState::Idle | RequestState::Pending => {}
    }
}

fn poll_delete(ctx: &mut StateCtx) {
    let waiting = ctx.state::<TypeTableState>().awaiting_delete;
    let Some(result) = ctx
        .cached::<DeleteTypesCompute>()
        .and_then(|c| settled(waiting, c.request_id, &c.state))
    else {
        return;
    };
    let state = ctx.state_mut::<TypeTableState>();
    state.awaiting_delete = None;
    state.delete_mode.exit();
    if let RequestState::Failed(err) = result {
        state.notice = Some(Notice::error(err.message()));
    }
}
