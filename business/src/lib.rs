//! Records, import parsing, REST calls and table workflows of the FFGZ admin
//! client. Everything here is UI-agnostic and lives in a [`StateCtx`].

pub mod activity_log;
pub mod api;
pub mod bulk;
mod config;
pub mod data_table;
pub mod http;
pub mod import;
mod macros;
pub mod model;
pub mod numeric;
pub mod table;
pub mod types_table;

pub use config::{BusinessConfig, DEFAULT_API_BASE_URL};

use ffgz_states::StateCtx;

/// Register every state, compute and command of the client.
pub fn register_all(ctx: &mut StateCtx, config: BusinessConfig) {
    log::info!("Using API at {}", config.api_url());
    ctx.add_state(config);
    types_table::register(ctx);
    data_table::register(ctx);
    activity_log::register(ctx);
}
