use std::any::{Any, TypeId};

use crate::{Dep, Updater};

/// State ids and compute ids a compute derives from.
pub type ComputeDeps = (&'static [TypeId], &'static [TypeId]);

/// A derived or cached value stored in a [`StateCtx`](crate::StateCtx).
///
/// Most computes in this workspace are command-updated caches: a
/// [`Command`](crate::Command) performs the side effect and replaces the
/// compute through its updater, and the default no-op [`compute`] body is
/// kept. Side effects must not live in [`compute`] itself because it runs
/// implicitly every frame via [`StateCtx::run_computed`](crate::StateCtx::run_computed).
pub trait Compute: Any + Send {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn deps(&self) -> ComputeDeps {
        (&[], &[])
    }

    /// Derive a new value from `deps` and publish it via `updater`.
    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {}

    /// Clone of this compute for command snapshots. `None` (the default)
    /// opts out.
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }

    /// Replace `self` with a value produced by an updater.
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Canonical [`Compute::assign_box`] body: downcast and overwrite.
pub fn assign_impl<T: Any>(this: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *this = *value,
        Err(_) => log::error!(
            "compute update for {} carried a mismatched payload",
            std::any::type_name::<T>()
        ),
    }
}
