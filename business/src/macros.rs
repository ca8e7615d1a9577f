//! `State` / `Compute` impls for plain cloneable values.

/// Snapshot-capable state: commands receive a clone.
macro_rules! snapshot_state {
    ($($ty:ty),+ $(,)?) => {$(
        impl ::ffgz_states::SnapshotClone for $ty {
            fn clone_boxed(&self) -> Option<Box<dyn ::std::any::Any + Send>> {
                Some(Box::new(self.clone()))
            }
        }

        impl ::ffgz_states::State for $ty {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }

            fn assign_box(&mut self, new_self: Box<dyn ::std::any::Any + Send>) {
                ::ffgz_states::state_assign_impl(self, new_self);
            }
        }
    )+};
}

/// Command-published cache.
macro_rules! snapshot_compute {
    ($($ty:ty),+ $(,)?) => {$(
        impl ::ffgz_states::SnapshotClone for $ty {
            fn clone_boxed(&self) -> Option<Box<dyn ::std::any::Any + Send>> {
                Some(Box::new(self.clone()))
            }
        }

        impl ::ffgz_states::Compute for $ty {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn assign_box(&mut self, new_self: Box<dyn ::std::any::Any + Send>) {
                ::ffgz_states::assign_impl(self, new_self);
            }
        }
    )+};
}

/// Command-published list cache tagged with a `request_id`. Responses can
/// land out of order, so a value older than the cached one is dropped.
macro_rules! list_compute {
    ($($ty:ty),+ $(,)?) => {$(
        impl ::ffgz_states::SnapshotClone for $ty {
            fn clone_boxed(&self) -> Option<Box<dyn ::std::any::Any + Send>> {
                Some(Box::new(self.clone()))
            }
        }

        impl ::ffgz_states::Compute for $ty {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn assign_box(&mut self, new_self: Box<dyn ::std::any::Any + Send>) {
                match new_self.downcast::<$ty>() {
                    Ok(value) if value.request_id < self.request_id => ::log::debug!(
                        "Dropping stale {} response {} (showing {})",
                        stringify!($ty),
                        value.request_id,
                        self.request_id
                    ),
                    Ok(value) => *self = *value,
                    Err(_) => ::log::error!("published value is not a {}", stringify!($ty)),
                }
            }
        }
    )+};
}

/// UI-only state that commands never read.
macro_rules! local_state {
    ($($ty:ty),+ $(,)?) => {$(
        impl ::ffgz_states::SnapshotClone for $ty {}

        impl ::ffgz_states::State for $ty {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }
        }
    )+};
}

pub(crate) use {list_compute, local_state, snapshot_compute, snapshot_state};
