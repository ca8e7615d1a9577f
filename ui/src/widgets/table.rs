//! Table pieces shared by the type and data panels.

use egui::{Align, Color32, Frame, Layout, Margin, Stroke, Ui};
use egui_extras::{Column, TableBuilder, TableRow};
use ffgz_business::table::{DeleteMode, LoadStatus};

use crate::utils::colors::{COLOR_RED, HEADER_BG_COLOR, TABLE_BORDER_COLOR};

const ROW_HEIGHT: f32 = 24.0;
const CHECKBOX_WIDTH: f32 = 28.0;

/// Delete-mode controls of a toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteAction {
    Press,
    Exit,
    SelectAll(bool),
    Toggle(usize),
}

/// "Delete", "Exit delete mode" and "Select all", in that order.
pub fn delete_controls(
    ui: &mut Ui,
    mode: &DeleteMode,
    visible: &[usize],
    busy: bool,
) -> Option<DeleteAction> {
    let mut action = None;
    if ui
        .add_enabled(!busy, egui::Button::new("Delete"))
        .clicked()
    {
        action = Some(DeleteAction::Press);
    }
    if mode.show_exit(visible) && ui.button("Exit delete mode").clicked() {
        action = Some(DeleteAction::Exit);
    }
    if mode.is_active() {
        let mut all = mode.all_visible_checked(visible);
        if ui.checkbox(&mut all, "Select all").changed() {
            action = Some(DeleteAction::SelectAll(all));
        }
    }
    action
}

/// Spinner while loading, the failure message after a failed load.
pub fn load_status(ui: &mut Ui, status: &LoadStatus) {
    if status.is_loading() {
        ui.spinner();
    } else if let Some(err) = status.error() {
        ui.colored_label(COLOR_RED, err.message());
    }
}

/// Bordered, striped table over `rows` (indices into the loaded list).
///
/// A checkbox column is prepended while delete-mode is active; checkbox
/// clicks come back as [`DeleteAction::Toggle`].
pub fn render_table(
    ui: &mut Ui,
    id: &str,
    headers: &[&str],
    rows: &[usize],
    mode: &DeleteMode,
    mut cells: impl FnMut(&mut TableRow<'_, '_>, usize),
) -> Option<DeleteAction> {
    let mut toggled = None;
    let active = mode.is_active();

    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .show(ui, |ui| {
            ui.push_id(id, |ui| {
                let mut builder = TableBuilder::new(ui)
                    .striped(true)
                    .resizable(true)
                    .cell_layout(Layout::left_to_right(Align::Center));
                if active {
                    builder = builder.column(Column::exact(CHECKBOX_WIDTH));
                }
                builder = builder
                    .columns(Column::auto().at_least(80.0), headers.len().saturating_sub(1))
                    .column(Column::remainder());

                builder
                    .header(ROW_HEIGHT, |mut header| {
                        if active {
                            header.col(|_| {});
                        }
                        for title in headers {
                            header.col(|ui| {
                                header_cell(ui, title);
                            });
                        }
                    })
                    .body(|body| {
                        body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                            let index = rows[row.index()];
                            if active {
                                row.col(|ui| {
                                    let mut checked = mode.is_checked(index);
                                    if ui.checkbox(&mut checked, "").changed() {
                                        toggled = Some(DeleteAction::Toggle(index));
                                    }
                                });
                            }
                            cells(&mut row, index);
                        });
                    });
            });
        });

    toggled
}

fn header_cell(ui: &mut Ui, title: &str) {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.strong(title);
        });
}

/// Placeholder shown instead of an empty table body.
pub fn empty_hint(ui: &mut Ui, text: &str) {
    ui.add_space(8.0);
    ui.label(egui::RichText::new(text).color(Color32::GRAY));
}
