//! Type table panel: server search, add/import and edit dialogs, bulk delete.

mod modals;
mod panel;

pub use panel::types_panel;
