use std::any::{TypeId, type_name};
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio_util::sync::CancellationToken;

use crate::updater::Envelope;
use crate::{
    Command, CommandSnapshot, Compute, ComputeSnapshot, Dep, LatestOnlyUpdater, State,
    StateSnapshot, TaskHandle, TaskId, Updater,
};

/// Per-command-type dispatch bookkeeping: the shared generation counter and
/// the handle of the most recent task.
#[derive(Default)]
struct DispatchSlot {
    latest: Arc<AtomicU64>,
    handle: Option<TaskHandle>,
}

/// Where command futures run.
///
/// On native this prefers the ambient Tokio runtime when one exists (so
/// `#[tokio::test]` harnesses share the test runtime), otherwise it owns a
/// small runtime. On wasm, futures run on the JS event loop.
enum Spawner {
    #[cfg(not(target_arch = "wasm32"))]
    Ambient(tokio::runtime::Handle),
    #[cfg(not(target_arch = "wasm32"))]
    Owned(tokio::runtime::Runtime),
    #[cfg(target_arch = "wasm32")]
    Local,
}

impl Spawner {
    #[cfg(not(target_arch = "wasm32"))]
    fn new() -> Self {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => Self::Ambient(handle),
            Err(_) => {
                let runtime = tokio::runtime::Builder::new_multi_thread()
                    .worker_threads(2)
                    .enable_all()
                    .build()
                    .expect("failed to start the command runtime");
                Self::Owned(runtime)
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn new() -> Self {
        Self::Local
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn spawn(&self, future: Pin<Box<dyn Future<Output = ()> + Send>>) {
        let handle = match self {
            Self::Ambient(handle) => handle.clone(),
            Self::Owned(runtime) => runtime.handle().clone(),
        };
        drop(handle.spawn(future));
    }

    #[cfg(target_arch = "wasm32")]
    fn spawn(&self, future: Pin<Box<dyn Future<Output = ()> + Send>>) {
        let Self::Local = self;
        wasm_bindgen_futures::spawn_local(future);
    }
}

/// Typed storage for application state plus the dispatch/sync machinery.
///
/// The frame loop drives it in a fixed order:
/// 1. [`sync_computes`](Self::sync_computes): apply queued updates;
/// 2. render, reading states/computes and enqueueing commands;
/// 3. [`run_computed`](Self::run_computed): let derived computes publish;
/// 4. [`flush_commands`](Self::flush_commands): dispatch what the frame
///    enqueued.
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn State>>,
    computes: BTreeMap<TypeId, Box<dyn Compute>>,
    tx: flume::Sender<Envelope>,
    rx: flume::Receiver<Envelope>,
    dispatches: BTreeMap<TypeId, DispatchSlot>,
    pending: Vec<(TypeId, fn(&mut Self))>,
    spawner: Spawner,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (tx, rx) = flume::unbounded();
        Self {
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            tx,
            rx,
            dispatches: BTreeMap::new(),
            pending: Vec::new(),
            spawner: Spawner::new(),
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        self.computes.insert(TypeId::of::<T>(), Box::new(compute));
    }

    /// Reference to a registered state.
    ///
    /// # Panics
    /// Panics if the state type was never registered.
    pub fn state<T: State>(&self) -> &T {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .unwrap_or_else(|| panic!("state {} is not registered", type_name::<T>()))
    }

    /// Mutable reference to a registered state.
    ///
    /// # Panics
    /// Panics if the state type was never registered.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("state {} is not registered", type_name::<T>()))
    }

    /// Mutate a registered state in place.
    pub fn update<T: State>(&mut self, mutate: impl FnOnce(&mut T)) {
        mutate(self.state_mut::<T>());
    }

    /// Read a registered compute, or `None` if it was never recorded.
    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|compute| compute.as_any().downcast_ref::<T>())
    }

    /// Mutate a registered compute in place (e.g. to acknowledge a finished
    /// action by resetting its cache).
    ///
    /// # Panics
    /// Panics if the compute type was never recorded.
    pub fn update_compute<T: Compute>(&mut self, mutate: impl FnOnce(&mut T)) {
        let compute = self
            .computes
            .get_mut(&TypeId::of::<T>())
            .and_then(|compute| compute.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("compute {} is not registered", type_name::<T>()));
        mutate(compute);
    }

    /// Apply every queued [`Updater`] write to the registered entries.
    /// Call once per frame, before rendering.
    pub fn sync_computes(&mut self) {
        while let Ok(envelope) = self.rx.try_recv() {
            if let Some(state) = self.states.get_mut(&envelope.target) {
                state.assign_box(envelope.payload);
            } else if let Some(compute) = self.computes.get_mut(&envelope.target) {
                compute.assign_box(envelope.payload);
            } else {
                log::warn!(
                    "dropping update for unregistered entry {}",
                    envelope.target_name
                );
            }
        }
    }

    /// Run every recorded compute once. Command-updated caches keep the
    /// default no-op body, so this only does work for derived computes.
    pub fn run_computed(&self) {
        let updater = Updater::new(self.tx.clone());
        for compute in self.computes.values() {
            compute.compute(Dep::new(&self.states, &self.computes), updater.clone());
        }
    }

    /// Dispatch a command now: snapshot state, supersede the previous task
    /// of this command type, and spawn the new task.
    pub fn dispatch<C: Command + Default>(&mut self) {
        let snap = self.snapshot();

        let slot = self.dispatches.entry(TypeId::of::<C>()).or_default();
        if let Some(previous) = slot.handle.take() {
            previous.cancel();
        }
        let generation = slot.latest.fetch_add(1, Ordering::AcqRel) + 1;
        let token = CancellationToken::new();
        slot.handle = Some(TaskHandle::new(
            TaskId::new(TypeId::of::<C>(), generation),
            token.clone(),
        ));
        let updater = LatestOnlyUpdater::new(
            Updater::new(self.tx.clone()),
            generation,
            Arc::clone(&slot.latest),
        );

        let future = C::default().run(snap, updater, token);
        self.spawner.spawn(future);
    }

    /// Queue a command for [`flush_commands`](Self::flush_commands).
    ///
    /// Render code enqueues only; the app loop flushes end-of-frame. A
    /// command type queued more than once within a frame is dispatched once.
    pub fn enqueue_command<C: Command + Default>(&mut self) {
        let id = TypeId::of::<C>();
        if !self.pending.iter().any(|(queued, _)| *queued == id) {
            self.pending.push((id, Self::dispatch_entry::<C>));
        }
    }

    /// Number of commands waiting for the next flush.
    pub fn pending_commands(&self) -> usize {
        self.pending.len()
    }

    /// Dispatch everything enqueued this frame.
    pub fn flush_commands(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        for (_, dispatch) in pending {
            dispatch(self);
        }
    }

    fn dispatch_entry<C: Command + Default>(ctx: &mut Self) {
        ctx.dispatch::<C>();
    }

    fn snapshot(&self) -> CommandSnapshot {
        let mut states = StateSnapshot::new();
        for (id, state) in &self.states {
            if let Some(cloned) = state.snapshot() {
                states.insert_cloned(*id, cloned);
            }
        }
        let mut computes = ComputeSnapshot::new();
        for (id, compute) in &self.computes {
            if let Some(cloned) = compute.snapshot() {
                computes.insert_cloned(*id, cloned);
            }
        }
        CommandSnapshot::new(states, computes)
    }
}
