use std::any::TypeId;
use std::collections::BTreeMap;

use flume::{Receiver, Sender};

#[cfg(target_arch = "wasm32")]
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use crate::updater::Published;
use crate::{Command, CommandSnapshot, Compute, Error, State, Updater};

/// Owns every registered state, compute and command of the application.
///
/// The UI thread is the only writer. Commands run detached and report back
/// through an [`Updater`]; their values land in the context on the next
/// [`StateCtx::sync_computes`].
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn State>>,
    computes: BTreeMap<TypeId, Box<dyn Compute>>,
    commands: BTreeMap<TypeId, Box<dyn Command>>,
    queue: Vec<TypeId>,
    send: Sender<Published>,
    recv: Receiver<Published>,
    #[cfg(not(target_arch = "wasm32"))]
    tasks: tokio::task::JoinSet<()>,
    #[cfg(target_arch = "wasm32")]
    in_flight: Arc<AtomicUsize>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("computes", &self.computes.len())
            .field("commands", &self.commands.len())
            .field("queued", &self.queue.len())
            .field("tasks", &self.task_count())
            .finish()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            commands: BTreeMap::new(),
            queue: Vec::new(),
            send,
            recv,
            #[cfg(not(target_arch = "wasm32"))]
            tasks: tokio::task::JoinSet::new(),
            #[cfg(target_arch = "wasm32")]
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        self.computes.insert(TypeId::of::<T>(), Box::new(compute));
    }

    pub fn record_command<T: Command>(&mut self, command: T) {
        self.commands.insert(TypeId::of::<T>(), Box::new(command));
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or_else(Error::state_not_found::<T>)
    }

    pub fn try_state_mut<T: State>(&mut self) -> Result<&mut T, Error> {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .ok_or_else(Error::state_not_found::<T>)
    }

    /// # Panics
    /// Panics when `T` was never registered with [`StateCtx::add_state`].
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    /// # Panics
    /// Panics when `T` was never registered with [`StateCtx::add_state`].
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.try_state_mut::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>())
    }

    pub fn compute<T: Compute>(&self) -> Result<&T, Error> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|compute| compute.as_any().downcast_ref::<T>())
            .ok_or_else(Error::compute_not_found::<T>)
    }

    /// Latest published value of a compute, `None` when it was never recorded.
    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.compute::<T>().ok()
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    /// Queue a command for the next [`StateCtx::flush_commands`].
    ///
    /// A command already waiting in the queue is not queued twice.
    pub fn enqueue_command<T: Command>(&mut self) {
        let id = TypeId::of::<T>();
        if !self.commands.contains_key(&id) {
            log::error!("{}", Error::command_not_found::<T>());
            return;
        }
        if !self.queue.contains(&id) {
            self.queue.push(id);
        }
    }

    /// Enqueue `T` and start the queue immediately.
    pub fn dispatch<T: Command>(&mut self) {
        self.enqueue_command::<T>();
        self.flush_commands();
    }

    pub fn queued_commands(&self) -> usize {
        self.queue.len()
    }

    /// Start every queued command. Natively this must be called inside a
    /// tokio runtime.
    pub fn flush_commands(&mut self) {
        let queue = std::mem::take(&mut self.queue);
        for id in queue {
            let Some(command) = self.commands.get(&id) else {
                continue;
            };
            let future = command.run(self.snapshot(), self.updater());
            self.spawn(future);
        }
    }

    fn snapshot(&self) -> CommandSnapshot {
        let mut snap = CommandSnapshot::new();
        for (id, state) in &self.states {
            if let Some(value) = state.clone_boxed() {
                snap.insert_state(*id, value);
            }
        }
        for (id, compute) in &self.computes {
            if let Some(value) = compute.clone_boxed() {
                snap.insert_compute(*id, value);
            }
        }
        snap
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn spawn(&mut self, future: crate::CommandFuture) {
        self.tasks.spawn(future);
    }

    #[cfg(target_arch = "wasm32")]
    fn spawn(&mut self, future: crate::CommandFuture) {
        let in_flight = Arc::clone(&self.in_flight);
        in_flight.fetch_add(1, Ordering::SeqCst);
        wasm_bindgen_futures::spawn_local(async move {
            future.await;
            in_flight.fetch_sub(1, Ordering::SeqCst);
        });
    }

    /// Apply every value published by commands since the last call.
    pub fn sync_computes(&mut self) {
        #[cfg(not(target_arch = "wasm32"))]
        while let Some(done) = self.tasks.try_join_next() {
            if let Err(err) = done {
                log::error!("command task failed: {err}");
            }
        }

        while let Ok((id, value)) = self.recv.try_recv() {
            if let Some(compute) = self.computes.get_mut(&id) {
                compute.assign_box(value);
            } else if let Some(state) = self.states.get_mut(&id) {
                state.assign_box(value);
            } else {
                log::warn!("dropping value published for unregistered type {id:?}");
            }
        }
    }

    /// Commands started but not yet reaped.
    pub fn task_count(&self) -> usize {
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.tasks.len()
        }
        #[cfg(target_arch = "wasm32")]
        {
            self.in_flight.load(Ordering::SeqCst)
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn task_set_mut(&mut self) -> &mut tokio::task::JoinSet<()> {
        &mut self.tasks
    }
}
