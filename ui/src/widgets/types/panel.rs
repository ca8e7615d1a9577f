use egui::{Key, TextEdit, Ui};
use ffgz_business::numeric::format_optional;
use ffgz_business::types_table::TypeTableState;
use ffgz_business::types_table::controller::{self, list_status, loaded_types};
use ffgz_states::StateCtx;

use super::modals::{DialogAction, add_type_window, edit_type_window};
use crate::utils::file_picker::FilePickerHandler;
use crate::widgets::notice::{confirm_delete_window, notice_window};
use crate::widgets::table::{DeleteAction, delete_controls, empty_hint, load_status, render_table};

const HEADERS: [&str; 7] = ["Model", "Load", "Damping", "Kx", "Ky", "Kz", "Actions"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypeAction {
    Search,
    OpenAdd,
    Edit(usize),
    Delete(DeleteAction),
    ConfirmDelete,
    CancelDelete,
    DismissNotice,
    Dialog(DialogAction),
}

pub fn types_panel(ctx: &mut StateCtx, picker: &dyn FilePickerHandler, ui: &mut Ui) {
    let mut actions = Vec::new();
    let status = list_status(ctx);
    let visible: Vec<usize> = (0..loaded_types(ctx).len()).collect();

    ui.horizontal(|ui| {
        let state = ctx.state_mut::<TypeTableState>();
        let response = ui.add(
            TextEdit::singleline(&mut state.search)
                .hint_text("Search model")
                .desired_width(180.0),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
        if ui.button("Search").clicked() || submitted {
            actions.push(TypeAction::Search);
        }
        if ui.button("Add type").clicked() {
            actions.push(TypeAction::OpenAdd);
        }
        ui.separator();
        if let Some(action) =
            delete_controls(ui, &state.delete_mode, &visible, state.is_deleting())
        {
            actions.push(TypeAction::Delete(action));
        }
        load_status(ui, &status);
    });
    ui.add_space(6.0);

    let records = loaded_types(ctx);
    let state = ctx.state::<TypeTableState>();
    if records.is_empty() && !status.is_loading() {
        empty_hint(ui, "No types");
    } else {
        let toggled = render_table(
            ui,
            "types_table",
            &HEADERS,
            &visible,
            &state.delete_mode,
            |row, index| {
                let record = &records[index];
                row.col(|ui| {
                    ui.label(&record.model);
                });
                for value in record.coefficients() {
                    row.col(|ui| {
                        ui.label(format_optional(value));
                    });
                }
                row.col(|ui| {
                    if ui.small_button("Edit").clicked() {
                        actions.push(TypeAction::Edit(index));
                    }
                });
            },
        );
        if let Some(toggled) = toggled {
            actions.push(TypeAction::Delete(toggled));
        }
    }

    let egui_ctx = ui.ctx().clone();
    if let Some(pending) = &state.pending_delete {
        match confirm_delete_window(&egui_ctx, pending, "types") {
            Some(true) => actions.push(TypeAction::ConfirmDelete),
            Some(false) => actions.push(TypeAction::CancelDelete),
            None => {}
        }
    }
    if let Some(notice) = &state.notice
        && notice_window(&egui_ctx, notice)
    {
        actions.push(TypeAction::DismissNotice);
    }

    let state = ctx.state_mut::<TypeTableState>();
    if state.add.open
        && let Some(action) = add_type_window(&egui_ctx, &mut state.add)
    {
        actions.push(TypeAction::Dialog(action));
    }
    if let Some(edit) = state.edit.as_mut()
        && let Some(action) = edit_type_window(&egui_ctx, edit)
    {
        actions.push(TypeAction::Dialog(action));
    }

    for action in actions {
        apply(ctx, picker, action);
    }
}

fn apply(ctx: &mut StateCtx, picker: &dyn FilePickerHandler, action: TypeAction) {
    match action {
        TypeAction::Search => controller::search_types(ctx),
        TypeAction::OpenAdd => controller::open_add(ctx),
        TypeAction::Edit(row) => controller::open_edit(ctx, row),
        TypeAction::Delete(DeleteAction::Press) => controller::press_delete(ctx),
        TypeAction::Delete(DeleteAction::Exit) => controller::exit_delete_mode(ctx),
        TypeAction::Delete(DeleteAction::SelectAll(checked)) => {
            controller::set_all_checked(ctx, checked);
        }
        TypeAction::Delete(DeleteAction::Toggle(row)) => controller::toggle_row(ctx, row),
        TypeAction::ConfirmDelete => controller::confirm_delete(ctx),
        TypeAction::CancelDelete => controller::cancel_delete(ctx),
        TypeAction::DismissNotice => controller::dismiss_notice(ctx),
        TypeAction::Dialog(DialogAction::ChooseFile) => picker.request(),
        TypeAction::Dialog(DialogAction::SaveAdd) => controller::save_add(ctx),
        TypeAction::Dialog(DialogAction::CloseAdd) => controller::close_add(ctx),
        TypeAction::Dialog(DialogAction::SaveEdit) => controller::save_edit(ctx),
        TypeAction::Dialog(DialogAction::CloseEdit) => controller::close_edit(ctx),
    }
}
