use std::any::{Any, type_name};

/// Produces an owned, `Send` copy of a value for command snapshots.
///
/// States that a command never reads can keep the default, which opts them
/// out of snapshots entirely.
pub trait SnapshotClone {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        None
    }
}

/// A value stored once per type inside [`crate::StateCtx`].
pub trait State: Any + SnapshotClone {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Replace `self` with a value published through an [`crate::Updater`].
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        log::warn!(
            "state does not accept published values, dropping {:?}",
            new_self.type_id()
        );
    }
}

/// Shared `assign_box` body for states: downcast and overwrite.
pub fn state_assign_impl<T: State>(state: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *state = *value,
        Err(_) => log::error!("published value is not a {}", type_name::<T>()),
    }
}
