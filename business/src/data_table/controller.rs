//! User actions on the data table.

use ffgz_states::StateCtx;

use super::commands::{
    DataListCompute, DataListInput, DeleteDataCommand, DeleteDataCompute, DeleteDataInput,
    RefreshDataCommand, UploadDataCommand, UploadDataCompute, UploadDataInput,
};
use super::state::{DataTableState, UploadDialog};
use crate::import::parse_data_file;
use crate::model::DataRow;
use crate::table::{
    DeletePress, ImportStatus, LoadStatus, Notice, PendingDelete, RequestState, model_options,
    visible_rows,
};
use crate::types_table::controller::loaded_types;

pub const MSG_SELECT_TO_DELETE: &str = "Select rows to delete";
pub const MSG_SELECT_MODELS: &str = "Select both upper and lower models";
pub const MSG_NOTHING_TO_UPLOAD: &str = "Nothing to upload";

pub fn loaded_rows(ctx: &StateCtx) -> &[DataRow] {
    ctx.cached::<DataListCompute>()
        .map(|list| list.rows.as_slice())
        .unwrap_or_default()
}

pub fn list_status(ctx: &StateCtx) -> LoadStatus {
    ctx.cached::<DataListCompute>()
        .map(|list| list.status.clone())
        .unwrap_or_default()
}

/// Indices of the loaded rows passing the applied filter.
pub fn visible(ctx: &StateCtx) -> Vec<usize> {
    let query = &ctx.state::<DataTableState>().applied_filter;
    visible_rows(
        loaded_rows(ctx)
            .iter()
            .map(|row| (row.upper_model.as_str(), row.lower_model.as_str())),
        query,
    )
}

pub fn load_data(ctx: &mut StateCtx) {
    let request_id = ctx.state_mut::<DataTableState>().next_request();
    ctx.update::<DataListInput>(|input| input.request_id = request_id);
    ctx.update::<DataTableState>(|state| {
        state.awaiting_list = Some(request_id);
        state.delete_mode.clear_checks();
    });
    ctx.enqueue_command::<RefreshDataCommand>();
}

/// Apply the filter box text. Checked rows that become hidden stay checked
/// but are ignored by delete.
pub fn apply_filter(ctx: &mut StateCtx) {
    ctx.update::<DataTableState>(|state| state.applied_filter = state.filter.clone());
}

pub fn press_delete(ctx: &mut StateCtx) {
    let visible = visible(ctx);
    let press = ctx
        .state_mut::<DataTableState>()
        .delete_mode
        .press(&visible);

    let rows = match press {
        DeletePress::Entered => return,
        DeletePress::NothingSelected => {
            ctx.state_mut::<DataTableState>().notice = Some(Notice::info(MSG_SELECT_TO_DELETE));
            return;
        }
        DeletePress::Selected(rows) => rows,
    };

    let loaded = loaded_rows(ctx);
    let (ids, lines): (Vec<i64>, Vec<String>) = rows
        .iter()
        .filter_map(|row| loaded.get(*row))
        .filter_map(|row| {
            let line = format!(
                "Upper: {}, Lower: {}, Range: {}",
                row.upper_model, row.lower_model, row.freq_range
            );
            row.id.map(|id| (id, line))
        })
        .unzip();
    if ids.is_empty() {
        ctx.state_mut::<DataTableState>().notice = Some(Notice::info(MSG_SELECT_TO_DELETE));
        return;
    }

    ctx.state_mut::<DataTableState>().pending_delete = Some(PendingDelete { ids, lines });
}

pub fn toggle_row(ctx: &mut StateCtx, row: usize) {
    ctx.state_mut::<DataTableState>().delete_mode.toggle(row);
}

pub fn set_all_checked(ctx: &mut StateCtx, checked: bool) {
    let visible = visible(ctx);
    ctx.state_mut::<DataTableState>()
        .delete_mode
        .select_all(&visible, checked);
}

pub fn confirm_delete(ctx: &mut StateCtx) {
    let Some(pending) = ctx.state_mut::<DataTableState>().pending_delete.take() else {
        return;
    };
    let state = ctx.state_mut::<DataTableState>();
    let request_id = state.next_request();
    let reload_id = state.next_request();
    ctx.update::<DeleteDataInput>(|input| {
        input.request_id = request_id;
        input.reload_id = reload_id;
        input.ids = pending.ids;
    });
    ctx.state_mut::<DataTableState>().awaiting_delete = Some(request_id);
    ctx.enqueue_command::<DeleteDataCommand>();
}

pub fn cancel_delete(ctx: &mut StateCtx) {
    ctx.state_mut::<DataTableState>().pending_delete = None;
}

pub fn exit_delete_mode(ctx: &mut StateCtx) {
    ctx.state_mut::<DataTableState>().delete_mode.exit();
}

/// Open the upload dialog with the models currently in the type table.
pub fn open_upload(ctx: &mut StateCtx) {
    let models = model_options(loaded_types(ctx));
    ctx.state_mut::<DataTableState>().upload = UploadDialog {
        open: true,
        models,
        ..UploadDialog::default()
    };
}

pub fn close_upload(ctx: &mut StateCtx) {
    ctx.state_mut::<DataTableState>().upload = UploadDialog::default();
}

fn reset_pair(upload: &mut UploadDialog) {
    upload.models_confirmed = false;
    upload.staged.clear();
    upload.status = ImportStatus::Idle;
}

pub fn select_upper(ctx: &mut StateCtx, model: String) {
    let upload = &mut ctx.state_mut::<DataTableState>().upload;
    upload.upper = Some(model);
    reset_pair(upload);
}

pub fn select_lower(ctx: &mut StateCtx, model: String) {
    let upload = &mut ctx.state_mut::<DataTableState>().upload;
    upload.lower = Some(model);
    reset_pair(upload);
}

pub fn confirm_models(ctx: &mut StateCtx) {
    let state = ctx.state_mut::<DataTableState>();
    if state.upload.selected_pair().is_some() {
        state.upload.models_confirmed = true;
    } else {
        state.notice = Some(Notice::error(MSG_SELECT_MODELS));
    }
}

/// Parse a file for the confirmed model pair. A failed parse keeps the
/// previously staged rows.
pub fn stage_data_file(ctx: &mut StateCtx, name: &str, bytes: &[u8]) {
    let state = ctx.state_mut::<DataTableState>();
    let pair = state
        .upload
        .selected_pair()
        .filter(|_| state.upload.models_confirmed)
        .map(|(upper, lower)| (upper.to_owned(), lower.to_owned()));
    let Some((upper, lower)) = pair else {
        state.notice = Some(Notice::error(MSG_SELECT_MODELS));
        return;
    };

    match parse_data_file(name, bytes, &upper, &lower) {
        Ok(rows) => {
            state.upload.status = ImportStatus::Parsed {
                file: name.to_owned(),
                count: rows.len(),
            };
            state.upload.staged = rows;
        }
        Err(err) => {
            log::warn!("Import of {name} failed: {err}");
            state.upload.status = ImportStatus::Failed(err.to_string());
        }
    }
}

pub fn save_upload(ctx: &mut StateCtx) {
    let upload = &ctx.state::<DataTableState>().upload;
    if upload.uploading.is_some() {
        return;
    }
    if upload.staged.is_empty() {
        ctx.state_mut::<DataTableState>().notice = Some(Notice::info(MSG_NOTHING_TO_UPLOAD));
        return;
    }
    let rows = upload.staged.clone();
    let file = match &upload.status {
        ImportStatus::Parsed { file, .. } => file.clone(),
        _ => String::new(),
    };

    let state = ctx.state_mut::<DataTableState>();
    let request_id = state.next_request();
    let reload_id = state.next_request();
    let count = rows.len();
    ctx.update::<UploadDataInput>(|input| {
        input.request_id = request_id;
        input.reload_id = reload_id;
        input.rows = rows;
    });
    let upload = &mut ctx.state_mut::<DataTableState>().upload;
    upload.uploading = Some(request_id);
    upload.status = ImportStatus::Uploading { file, count };
    ctx.enqueue_command::<UploadDataCommand>();
}

pub fn dismiss_notice(ctx: &mut StateCtx) {
    ctx.state_mut::<DataTableState>().notice = None;
}

pub fn poll(ctx: &mut StateCtx) {
    poll_list(ctx);
    poll_upload(ctx);
    poll_delete(ctx);
}

fn poll_list(ctx: &mut StateCtx) {
    let Some(list) = ctx.cached::<DataListCompute>() else {
        return;
    };
    let request_id = list.request_id;
    let status = list.status.clone();
    let state = ctx.state_mut::<DataTableState>();
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

fn poll_upload(ctx: &mut StateCtx) {
    let waiting = ctx.state::<DataTableState>().upload.uploading;
    let Some(result) = ctx
        .cached::<UploadDataCompute>()
        .filter(|c| waiting == Some(c.request_id) && c.state.is_settled())
        .map(|c| c.state.clone())
    else {
        return;
    };
    let state = ctx.state_mut::<DataTableState>();
    state.upload = UploadDialog::default();
    state.delete_mode.clear_checks();
    if let RequestState::Done(summary) = result {
        let mut message = format!(
            "Uploaded {} of {} rows",
            summary.succeeded, summary.attempted
        );
        if summary.failed > 0 {
            message.push_str(&format!(", {} failed", summary.failed));
        }
        state.notice = Some(Notice::info(message));
    }
}

fn poll_delete(ctx: &mut StateCtx) {
    let waiting = ctx.state::<DataTableState>().awaiting_delete;
    let Some(result) = ctx
        .cached::<DeleteDataCompute>()
        .filter(|c| waiting == Some(c.request_id) && c.state.is_settled())
        .map(|c| c.state.clone())
    else {
        return;
    };
    let state = ctx.state_mut::<DataTableState>();
    state.awaiting_delete = None;
    state.delete_mode.exit();
    if let RequestState::Failed(err) = result {
        state.notice = Some(Notice::error(err.message()));
    }
}
