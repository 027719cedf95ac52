//! State for the roster panel.

use std::any::Any;

use roster_states::{State, state_assign_impl};

/// Text inputs owned by the roster panel, stored in `StateCtx` so harness
/// tests can drive them.
#[derive(Debug, Clone, Default)]
pub struct RosterPanelState {
    /// Server-side search box contents. Whenever it diverges from the
    /// recorded SearchQuery, the panel records it into `UsersQueryInput`
    /// and re-triggers both fetches. An untouched box keeps the query null.
    pub search_input: String,

    /// The users table's global filter text. Narrows the displayed rows
    /// in memory only.
    pub filter_input: String,
}

impl State for RosterPanelState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}
