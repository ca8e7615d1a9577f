//! Data table panel: client-side model filter, upload dialog, bulk delete.

mod panel;
mod upload;

pub use panel::data_panel;
