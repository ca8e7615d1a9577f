use egui::{Grid, Window};
use ffgz_business::types_table::{AddTypeDialog, EditTypeDialog, TypeForm};

use crate::widgets::import_zone::import_zone;

const FIELD_LABELS: [&str; 6] = ["Model", "Load", "Damping", "Kx", "Ky", "Kz"];

/// Button presses inside the add and edit windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    ChooseFile,
    SaveAdd,
    CloseAdd,
    SaveEdit,
    CloseEdit,
}

fn form_grid(ui: &mut egui::Ui, id: &str, form: &mut TypeForm) {
    Grid::new(id)
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            for (label, field) in FIELD_LABELS.iter().zip(form.fields_mut()) {
                ui.label(*label);
                ui.text_edit_singleline(field);
                ui.end_row();
            }
        });
}

pub fn add_type_window(ctx: &egui::Context, dialog: &mut AddTypeDialog) -> Option<DialogAction> {
    let mut open = true;
    let mut action = None;
    let saving = dialog.saving.is_some();

    Window::new("Add type")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.strong("Single record");
            form_grid(ui, "add_type_form", &mut dialog.form);

            ui.separator();
            ui.strong("Bulk import");
            if import_zone(ui, &dialog.status) {
                action = Some(DialogAction::ChooseFile);
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!saving, egui::Button::new("Save"))
                    .clicked()
                {
                    action = Some(DialogAction::SaveAdd);
                }
                if ui.button("Cancel").clicked() {
                    action = Some(DialogAction::CloseAdd);
                }
                if saving {
                    ui.spinner();
                }
            });
        });

    if !open {
        action = Some(DialogAction::CloseAdd);
    }
    action
}

pub fn edit_type_window(ctx: &egui::Context, dialog: &mut EditTypeDialog) -> Option<DialogAction> {
    let mut open = true;
    let mut action = None;
    let saving = dialog.saving.is_some();

    Window::new(format!("Edit type #{}", dialog.id))
        .id(egui::Id::new("edit_type_window"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            form_grid(ui, "edit_type_form", &mut dialog.form);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!saving, egui::Button::new("Save changes"))
                    .clicked()
                {
                    action = Some(DialogAction::SaveEdit);
                }
                if ui.button("Cancel").clicked() {
                    action = Some(DialogAction::CloseEdit);
                }
                if saving {
                    ui.spinner();
                }
            });
        });

    if !open {
        action = Some(DialogAction::CloseEdit);
    }
    action
}
