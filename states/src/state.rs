use std::any::Any;

/// A unit of application state stored in a [`StateCtx`](crate::StateCtx).
///
/// States are read and mutated synchronously from the frame loop. They can
/// also be replaced asynchronously through an [`Updater`](crate::Updater);
/// such replacements arrive via [`assign_box`](State::assign_box).
pub trait State: Any + Send {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Clone of this state for command snapshots.
    ///
    /// Returning `None` (the default) opts the state out of snapshots;
    /// commands then cannot read it.
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }

    /// Replace `self` with a value produced by an updater.
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Canonical [`State::assign_box`] body: downcast and overwrite.
pub fn state_assign_impl<T: Any>(this: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *this = *value,
        Err(_) => log::error!(
            "state update for {} carried a mismatched payload",
            std::any::type_name::<T>()
        ),
    }
}
