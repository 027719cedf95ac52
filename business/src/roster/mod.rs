//! The roster admin domain: backend wire contract, row shaping, REST client,
//! and the controller state machines behind the two tables.
//!
//! UI code reads the computes via `ctx.cached::<T>()` and triggers changes
//! by setting input states and dispatching commands. It defines no domain
//! `State`/`Compute`/`Command` of its own.

pub mod api;
pub mod delete_compute;
pub mod list_compute;
pub mod record_compute;
pub mod rows;
pub mod types;

/// Lifecycle of one fetch. The users list and the daily record advance
/// through this independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchStatus {
    /// No request attempted yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request succeeded.
    Loaded,
    /// The last request failed. Previously loaded data is kept.
    Error(String),
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}
