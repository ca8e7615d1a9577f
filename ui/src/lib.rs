#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod state;
pub mod utils;
pub mod widgets;

pub use app::FfgzApp;
