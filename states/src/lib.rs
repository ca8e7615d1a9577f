//! Minimal reactive state container used by the FFGZ admin UI.
//!
//! - [`State`]: user-editable values owned by the UI thread.
//! - [`Compute`]: cached results published by commands.
//! - [`Command`]: manual-only async side effects.

mod command;
mod compute;
mod ctx;
mod error;
mod snapshot;
mod state;
mod updater;

pub use command::{Command, CommandFuture};
pub use compute::{Compute, assign_impl};
pub use ctx::StateCtx;
pub use error::Error;
pub use snapshot::CommandSnapshot;
pub use state::{SnapshotClone, State, state_assign_impl};
pub use updater::Updater;
