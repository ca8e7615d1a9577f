use std::any::{Any, type_name};

use crate::SnapshotClone;

/// A cached result that the UI reads through `StateCtx::cached`.
///
/// Computes never run side effects themselves. Commands publish new values
/// through [`crate::Updater::set`] and `StateCtx::sync_computes` applies them
/// on the UI thread.
pub trait Compute: Any + SnapshotClone {
    fn as_any(&self) -> &dyn Any;

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared `assign_box` body for computes.
pub fn assign_impl<T: Compute>(compute: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *compute = *value,
        Err(_) => log::error!("published value is not a {}", type_name::<T>()),
    }
}
