use std::any::Any;
use std::future::Future;
use std::pin::Pin;

use crate::{CommandSnapshot, Updater};

pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// A manual-only side effect (network IO).
///
/// Commands never run implicitly: the UI enqueues them with
/// `StateCtx::enqueue_command` or `StateCtx::dispatch`. The synchronous part
/// of `run` reads inputs from the snapshot; the returned future performs IO
/// and reports through the updater.
pub trait Command: Any {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture;
}
