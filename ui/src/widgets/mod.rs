pub mod activity_log;
pub mod data;
mod import_zone;
pub mod notice;
pub mod table;
pub mod types;

pub use activity_log::activity_log_panel;
pub use data::data_panel;
pub use types::types_panel;
