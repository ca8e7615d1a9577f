use egui::{Frame, Margin, RichText, Stroke, Ui};
use ffgz_business::table::ImportStatus;

use crate::utils::colors::{COLOR_AMBER, COLOR_GREEN, COLOR_RED, TABLE_BORDER_COLOR};

/// Drop target with a "Choose file" button and the import status line.
/// Returns `true` when the button was clicked.
pub fn import_zone(ui: &mut Ui, status: &ImportStatus) -> bool {
    let mut choose = false;
    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .inner_margin(Margin::same(12))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label("Drop a file onto the window, or");
                choose = ui.button("Choose file").clicked();
            });
        });

    let color = match status {
        ImportStatus::Idle => None,
        ImportStatus::Uploading { .. } => Some(COLOR_AMBER),
        _ if status.is_error() => Some(COLOR_RED),
        _ => Some(COLOR_GREEN),
    };
    let text = RichText::new(status.text());
    ui.label(match color {
        Some(color) => text.color(color),
        None => text,
    });
    choose
}
