use std::any::{TypeId, type_name};
use std::collections::BTreeMap;

use crate::{Compute, State};

/// Read-only view of the registered states and computes, handed to
/// [`Compute::compute`](crate::Compute::compute).
pub struct Dep<'a> {
    states: &'a BTreeMap<TypeId, Box<dyn State>>,
    computes: &'a BTreeMap<TypeId, Box<dyn Compute>>,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(
        states: &'a BTreeMap<TypeId, Box<dyn State>>,
        computes: &'a BTreeMap<TypeId, Box<dyn Compute>>,
    ) -> Self {
        Self { states, computes }
    }

    /// Reference to a registered state.
    ///
    /// # Panics
    /// Panics if the state type was never registered.
    pub fn state_ref<T: State>(&self) -> &'a T {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .unwrap_or_else(|| panic!("state {} is not registered", type_name::<T>()))
    }

    /// Reference to a registered compute.
    ///
    /// # Panics
    /// Panics if the compute type was never registered.
    pub fn compute_ref<T: Compute>(&self) -> &'a T {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|compute| compute.as_any().downcast_ref::<T>())
            .unwrap_or_else(|| panic!("compute {} is not registered", type_name::<T>()))
    }
}
