use std::any::{Any, TypeId};

use flume::Sender;

pub(crate) type Published = (TypeId, Box<dyn Any + Send>);

/// Publishes new compute (or state) values from async commands back to the
/// UI thread. Values are applied by `StateCtx::sync_computes`.
#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<Published>,
}

impl Updater {
    pub(crate) fn new(send: Sender<Published>) -> Self {
        Self { send }
    }

    pub fn set<T: Any + Send>(&self, value: T) {
        if self.send.send((TypeId::of::<T>(), Box::new(value))).is_err() {
            log::warn!(
                "state context dropped before {} was published",
                std::any::type_name::<T>()
            );
        }
    }
}
