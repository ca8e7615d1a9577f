use egui::{Key, TextEdit, Ui};
use ffgz_business::data_table::DataTableState;
use ffgz_business::data_table::controller::{self, list_status, loaded_rows, visible};
use ffgz_business::numeric::format_optional;
use ffgz_states::StateCtx;

use super::upload::{UploadAction, upload_window};
use crate::utils::file_picker::FilePickerHandler;
use crate::widgets::notice::{confirm_delete_window, notice_window};
use crate::widgets::table::{DeleteAction, delete_controls, empty_hint, load_status, render_table};

const HEADERS: [&str; 4] = ["Upper model", "Lower model", "Frequency range", "Max excitation"];

#[derive(Debug, Clone, PartialEq, Eq)]
enum DataAction {
    Filter,
    OpenUpload,
    Delete(DeleteAction),
    ConfirmDelete,
    CancelDelete,
    DismissNotice,
    Upload(UploadAction),
}

pub fn data_panel(ctx: &mut StateCtx, picker: &dyn FilePickerHandler, ui: &mut Ui) {
    let mut actions = Vec::new();
    let status = list_status(ctx);
    let visible = visible(ctx);

    ui.horizontal(|ui| {
        let state = ctx.state_mut::<DataTableState>();
        let response = ui.add(
            TextEdit::singleline(&mut state.filter)
                .hint_text("Filter by model")
                .desired_width(180.0),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
        if ui.button("Query").clicked() || submitted {
            actions.push(DataAction::Filter);
        }
        if ui.button("Upload data").clicked() {
            actions.push(DataAction::OpenUpload);
        }
        ui.separator();
        if let Some(action) =
            delete_controls(ui, &state.delete_mode, &visible, state.is_deleting())
        {
            actions.push(DataAction::Delete(action));
        }
        load_status(ui, &status);
    });
    ui.add_space(6.0);

    let rows = loaded_rows(ctx);
    let state = ctx.state::<DataTableState>();
    if visible.is_empty() && !status.is_loading() {
        empty_hint(ui, "No data rows");
    } else {
        let toggled = render_table(
            ui,
            "data_table",
            &HEADERS,
            &visible,
            &state.delete_mode,
            |row, index| {
                let data = &rows[index];
                row.col(|ui| {
                    ui.label(&data.upper_model);
                });
                row.col(|ui| {
                    ui.label(&data.lower_model);
                });
                row.col(|ui| {
                    ui.label(&data.freq_range);
                });
                row.col(|ui| {
                    ui.label(format_optional(data.max_excit));
                });
            },
        );
        if let Some(toggled) = toggled {
            actions.push(DataAction::Delete(toggled));
        }
    }

    let egui_ctx = ui.ctx().clone();
    if let Some(pending) = &state.pending_delete {
        match confirm_delete_window(&egui_ctx, pending, "data rows") {
            Some(true) => actions.push(DataAction::ConfirmDelete),
            Some(false) => actions.push(DataAction::CancelDelete),
            None => {}
        }
    }
    if let Some(notice) = &state.notice
        && notice_window(&egui_ctx, notice)
    {
        actions.push(DataAction::DismissNotice);
    }

    let upload = &ctx.state::<DataTableState>().upload;
    if upload.open
        && let Some(action) = upload_window(&egui_ctx, upload)
    {
        actions.push(DataAction::Upload(action));
    }

    for action in actions {
        apply(ctx, picker, action);
    }
}

fn apply(ctx: &mut StateCtx, picker: &dyn FilePickerHandler, action: DataAction) {
    match action {
        DataAction::Filter => controller::apply_filter(ctx),
        DataAction::OpenUpload => controller::open_upload(ctx),
        DataAction::Delete(DeleteAction::Press) => controller::press_delete(ctx),
        DataAction::Delete(DeleteAction::Exit) => controller::exit_delete_mode(ctx),
        DataAction::Delete(DeleteAction::SelectAll(checked)) => {
            controller::set_all_checked(ctx, checked);
        }
        DataAction::Delete(DeleteAction::Toggle(row)) => controller::toggle_row(ctx, row),
        DataAction::ConfirmDelete => controller::confirm_delete(ctx),
        DataAction::CancelDelete => controller::cancel_delete(ctx),
        DataAction::DismissNotice => controller::dismiss_notice(ctx),
        DataAction::Upload(UploadAction::SelectUpper(model)) => controller::select_upper(ctx, model),
        DataAction::Upload(UploadAction::SelectLower(model)) => controller::select_lower(ctx, model),
        DataAction::Upload(UploadAction::ConfirmModels) => controller::confirm_models(ctx),
        DataAction::Upload(UploadAction::ChooseFile) => picker.request(),
        DataAction::Upload(UploadAction::Save) => controller::save_upload(ctx),
        DataAction::Upload(UploadAction::Close) => controller::close_upload(ctx),
    }
}
