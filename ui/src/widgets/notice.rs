//! Blocking notification and delete confirmation dialogs.
//!
//! Both are [`Modal`]s: the tables behind them take no input until the user
//! answers. Escape or a click on the backdrop counts as dismiss / cancel.

use egui::{Id, Modal, RichText};
use ffgz_business::table::{Notice, NoticeKind, PendingDelete};

use crate::utils::colors::COLOR_RED;

/// Returns `true` once the user dismissed the notice.
pub fn notice_window(ctx: &egui::Context, notice: &Notice) -> bool {
    let mut dismissed = false;
    let modal = Modal::new(Id::new("ffgz_notice")).show(ctx, |ui| {
        ui.set_max_width(360.0);
        ui.heading("Notice");
        let text = RichText::new(&notice.message);
        match notice.kind {
            NoticeKind::Info => ui.label(text),
            NoticeKind::Error => ui.label(text.color(COLOR_RED)),
        };
        ui.add_space(8.0);
        if ui.button("OK").clicked() {
            dismissed = true;
        }
    });
    dismissed || modal.should_close()
}

/// `Some(true)` on confirm, `Some(false)` on cancel.
pub fn confirm_delete_window(
    ctx: &egui::Context,
    pending: &PendingDelete,
    noun: &str,
) -> Option<bool> {
    let mut answer = None;
    let modal = Modal::new(Id::new("ffgz_confirm_delete")).show(ctx, |ui| {
        ui.set_max_width(420.0);
        ui.heading("Confirm delete");
        ui.label(pending.prompt(noun));
        ui.add_space(4.0);
        egui::ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
            for line in &pending.lines {
                ui.label(RichText::new(line).monospace());
            }
        });
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Confirm").clicked() {
                answer = Some(true);
            }
            if ui.button("Cancel").clicked() {
                answer = Some(false);
            }
        });
    });
    if answer.is_none() && modal.should_close() {
        answer = Some(false);
    }
    answer
}
