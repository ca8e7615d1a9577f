use egui::{ComboBox, Grid, Window};
use ffgz_business::data_table::UploadDialog;

use crate::widgets::import_zone::import_zone;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadAction {
    SelectUpper(String),
    SelectLower(String),
    ConfirmModels,
    ChooseFile,
    Save,
    Close,
}

fn model_picker(
    ui: &mut egui::Ui,
    label: &str,
    selected: Option<&str>,
    models: &[String],
) -> Option<String> {
    let mut picked = None;
    ComboBox::from_label(label)
        .selected_text(selected.unwrap_or("Select…"))
        .show_ui(ui, |ui| {
            for model in models {
                if ui
                    .selectable_label(selected == Some(model.as_str()), model)
                    .clicked()
                {
                    picked = Some(model.clone());
                }
            }
        });
    picked
}

/// Model pair selection, then file staging, then upload.
pub fn upload_window(ctx: &egui::Context, dialog: &UploadDialog) -> Option<UploadAction> {
    let mut open = true;
    let mut action = None;
    let uploading = dialog.uploading.is_some();

    Window::new("Upload data")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            if dialog.models.is_empty() {
                ui.label("No type models loaded yet");
            }
            Grid::new("upload_models").num_columns(1).show(ui, |ui| {
                if let Some(model) =
                    model_picker(ui, "Upper model", dialog.upper.as_deref(), &dialog.models)
                {
                    action = Some(UploadAction::SelectUpper(model));
                }
                ui.end_row();
                if let Some(model) =
                    model_picker(ui, "Lower model", dialog.lower.as_deref(), &dialog.models)
                {
                    action = Some(UploadAction::SelectLower(model));
                }
                ui.end_row();
            });
            if ui
                .add_enabled(!dialog.models_confirmed, egui::Button::new("Confirm models"))
                .clicked()
            {
                action = Some(UploadAction::ConfirmModels);
            }

            if dialog.models_confirmed {
                ui.separator();
                if import_zone(ui, &dialog.status) {
                    action = Some(UploadAction::ChooseFile);
                }
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let can_upload = dialog.models_confirmed && !dialog.staged.is_empty() && !uploading;
                if ui
                    .add_enabled(can_upload, egui::Button::new("Upload"))
                    .clicked()
                {
                    action = Some(UploadAction::Save);
                }
                if ui.button("Cancel").clicked() {
                    action = Some(UploadAction::Close);
                }
                if uploading {
                    ui.spinner();
                }
            });
        });

    if !open {
        action = Some(UploadAction::Close);
    }
    action
}
