//! Application-state runtime for the Roster workspace.
//!
//! The model is deliberately small:
//! - [`State`]: plain data registered in a [`StateCtx`], read and mutated
//!   synchronously by UI code.
//! - [`Compute`]: a cache that is only ever replaced through an [`Updater`]
//!   channel, applied at frame start by [`StateCtx::sync_computes`].
//! - [`Command`]: a manual-only async unit of work (network IO). Dispatching
//!   a command snapshots the registered state, hands the task a
//!   [`LatestOnlyUpdater`] bound to its dispatch generation, and cancels the
//!   previous task of the same command type. A superseded task's updates are
//!   dropped, so the applied result always belongs to the newest dispatch.

mod command;
mod compute;
mod ctx;
mod dep;
mod snapshot;
mod state;
mod task;
mod updater;

pub use command::Command;
pub use compute::{Compute, ComputeDeps, assign_impl};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use snapshot::{CommandSnapshot, ComputeSnapshot, StateSnapshot};
pub use state::{State, state_assign_impl};
pub use task::{TaskHandle, TaskId};
pub use updater::{LatestOnlyUpdater, Updater};
