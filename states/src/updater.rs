use std::any::{Any, TypeId, type_name};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// One state/compute replacement routed through the context channel.
pub(crate) struct Envelope {
    pub(crate) target: TypeId,
    pub(crate) target_name: &'static str,
    pub(crate) payload: Box<dyn Any + Send>,
}

/// Queues replacement values for states and computes.
///
/// Updates are applied on the next
/// [`StateCtx::sync_computes`](crate::StateCtx::sync_computes), which keeps
/// the frame loop the single writer of the registered entries.
#[derive(Clone)]
pub struct Updater {
    tx: flume::Sender<Envelope>,
}

impl Updater {
    pub(crate) fn new(tx: flume::Sender<Envelope>) -> Self {
        Self { tx }
    }

    /// Queue a replacement for the state or compute of type `T`.
    pub fn set<T: Any + Send>(&self, value: T) {
        let envelope = Envelope {
            target: TypeId::of::<T>(),
            target_name: type_name::<T>(),
            payload: Box::new(value),
        };
        if self.tx.send(envelope).is_err() {
            log::warn!(
                "state context dropped before an update for {} was applied",
                type_name::<T>()
            );
        }
    }
}

/// An [`Updater`] bound to one dispatch generation of a command type.
///
/// Every dispatch of a command type bumps a shared generation counter. A
/// task holding an older generation may still be running (its HTTP response
/// may resolve after a newer dispatch already started); its writes are
/// dropped here so the applied result always belongs to the newest
/// dispatch, never to whichever response happened to arrive last.
pub struct LatestOnlyUpdater {
    inner: Updater,
    generation: u64,
    latest: Arc<AtomicU64>,
}

impl LatestOnlyUpdater {
    pub(crate) fn new(inner: Updater, generation: u64, latest: Arc<AtomicU64>) -> Self {
        Self {
            inner,
            generation,
            latest,
        }
    }

    /// Whether this dispatch is still the newest of its command type.
    pub fn is_current(&self) -> bool {
        self.generation == self.latest.load(Ordering::Acquire)
    }

    /// Queue a replacement, unless this dispatch has been superseded.
    pub fn set<T: Any + Send>(&self, value: T) {
        if self.is_current() {
            self.inner.set(value);
        } else {
            log::debug!(
                "dropping {} update from superseded dispatch (generation {}, latest {})",
                type_name::<T>(),
                self.generation,
                self.latest.load(Ordering::Acquire)
            );
        }
    }
}
