use std::time::Duration;

use ffgz_business::activity_log;
use ffgz_business::data_table::{self, DataTableState};
use ffgz_business::types_table::{self, TypeTableState};
use ffgz_states::StateCtx;

use crate::state::{State, Tab};
use crate::utils::drop_handler::{DropHandler, SystemDropHandler};
use crate::utils::file_picker::{FilePickerHandler, PickedFile, SystemFilePickerHandler};
use crate::widgets;

/// Poll interval while commands are in flight.
const PENDING_REPAINT: Duration = Duration::from_millis(50);

pub struct FfgzApp {
    pub state: State,
    picker: Box<dyn FilePickerHandler>,
    drop_handler: Box<dyn DropHandler>,
}

impl FfgzApp {
    /// Called once before the first frame; queues the initial loads.
    pub fn new(state: State) -> Self {
        Self::with_handlers(
            state,
            Box::new(SystemFilePickerHandler::default()),
            Box::new(SystemDropHandler),
        )
    }

    pub fn with_handlers(
        mut state: State,
        picker: Box<dyn FilePickerHandler>,
        drop_handler: Box<dyn DropHandler>,
    ) -> Self {
        types_table::controller::load_types(&mut state.ctx);
        data_table::controller::load_data(&mut state.ctx);
        Self {
            state,
            picker,
            drop_handler,
        }
    }

    fn select_tab(&mut self, tab: Tab) {
        if self.state.tab == tab {
            return;
        }
        self.state.tab = tab;
        if tab == Tab::ActivityLog {
            activity_log::refresh(&mut self.state.ctx);
        }
    }
}

/// Hand a picked or dropped file to whichever import dialog is open.
pub fn deliver_file(ctx: &mut StateCtx, tab: Tab, file: PickedFile) {
    let types_open = ctx.state::<TypeTableState>().add.open;
    let upload_open = ctx.state::<DataTableState>().upload.open;
    match tab {
        Tab::Types if types_open => {
            types_table::controller::stage_import_file(ctx, &file.name, &file.bytes);
        }
        Tab::Data if upload_open => {
            data_table::controller::stage_data_file(ctx, &file.name, &file.bytes);
        }
        _ => log::debug!("Ignoring file {}: no import dialog open", file.name),
    }
}

impl eframe::App for FfgzApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Sync Compute for render
        self.state.ctx.sync_computes();
        types_table::controller::poll(&mut self.state.ctx);
        data_table::controller::poll(&mut self.state.ctx);

        if let Some(file) = self
            .picker
            .poll()
            .or_else(|| self.drop_handler.handle_drop(ctx))
        {
            deliver_file(&mut self.state.ctx, self.state.tab, file);
        }

        let mut tab = self.state.tab;
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.selectable_value(&mut tab, Tab::Types, "Types");
                ui.selectable_value(&mut tab, Tab::Data, "Data");
                ui.selectable_value(&mut tab, Tab::ActivityLog, "Activity log");
            });
        });
        self.select_tab(tab);

        egui::CentralPanel::default().show(ctx, |ui| match self.state.tab {
            Tab::Types => widgets::types_panel(&mut self.state.ctx, self.picker.as_ref(), ui),
            Tab::Data => widgets::data_panel(&mut self.state.ctx, self.picker.as_ref(), ui),
            Tab::ActivityLog => widgets::activity_log_panel(&mut self.state.ctx, ui),
        });

        // Run background jobs
        self.state.ctx.flush_commands();
        if self.state.ctx.task_count() > 0 {
            ctx.request_repaint_after(PENDING_REPAINT);
        }
    }
}
