use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;

/// Owned copies of every snapshot-capable state and compute, taken when a
/// command is flushed. Commands read their inputs from here so the async
/// part never borrows the `StateCtx`.
#[derive(Default)]
pub struct CommandSnapshot {
    states: BTreeMap<TypeId, Box<dyn Any + Send>>,
    computes: BTreeMap<TypeId, Box<dyn Any + Send>>,
}

impl CommandSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_state(&mut self, id: TypeId, value: Box<dyn Any + Send>) {
        self.states.insert(id, value);
    }

    pub fn insert_compute(&mut self, id: TypeId, value: Box<dyn Any + Send>) {
        self.computes.insert(id, value);
    }

    pub fn try_state<T: 'static>(&self) -> Option<&T> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
    }

    pub fn try_compute<T: 'static>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
    }

    /// # Panics
    /// Panics when the state was not registered or does not implement
    /// `SnapshotClone`; both are wiring mistakes.
    pub fn state<T: 'static>(&self) -> &T {
        self.try_state::<T>()
            .unwrap_or_else(|| panic!("State snapshot for {} is missing", type_name::<T>()))
    }

    /// # Panics
    /// Same contract as [`CommandSnapshot::state`].
    pub fn compute<T: 'static>(&self) -> &T {
        self.try_compute::<T>()
            .unwrap_or_else(|| panic!("Compute snapshot for {} is missing", type_name::<T>()))
    }
}
