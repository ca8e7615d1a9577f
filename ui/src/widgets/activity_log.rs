use egui::{Grid, RichText, ScrollArea, Ui};
use ffgz_business::activity_log::{self, LogsCompute};
use ffgz_states::StateCtx;

use crate::widgets::table::{empty_hint, load_status};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Latest server actions, newest first as the server returns them.
pub fn activity_log_panel(ctx: &mut StateCtx, ui: &mut Ui) {
    let mut refresh = false;
    let status = ctx
        .cached::<LogsCompute>()
        .map(|logs| logs.status.clone())
        .unwrap_or_default();

    ui.horizontal(|ui| {
        refresh = ui.button("Refresh").clicked();
        load_status(ui, &status);
    });
    ui.add_space(6.0);

    let entries = activity_log::entries(ctx);
    if entries.is_empty() {
        empty_hint(ui, "No activity recorded");
    } else {
        ScrollArea::vertical().show(ui, |ui| {
            Grid::new("activity_log")
                .num_columns(2)
                .striped(true)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    ui.strong("Time");
                    ui.strong("Action");
                    ui.end_row();
                    for entry in entries {
                        ui.label(
                            RichText::new(entry.ts.format(TIMESTAMP_FORMAT).to_string())
                                .monospace(),
                        );
                        ui.label(&entry.action);
                        ui.end_row();
                    }
                });
        });
    }

    if refresh {
        activity_log::refresh(ctx);
    }
}
