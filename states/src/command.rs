use std::any::Any;
use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::{CommandSnapshot, LatestOnlyUpdater};

/// A manual-only unit of work that is allowed to perform side effects
/// (network IO and the like).
///
/// Commands never run implicitly. They are dispatched explicitly via
/// [`StateCtx::dispatch`](crate::StateCtx::dispatch) or queued with
/// [`StateCtx::enqueue_command`](crate::StateCtx::enqueue_command) and run on
/// the async spawner. A command receives:
/// - a cloned [`CommandSnapshot`] of the registered states and computes,
///   taken at dispatch time;
/// - a [`LatestOnlyUpdater`] bound to this dispatch's generation; writes
///   from a superseded dispatch are dropped;
/// - a [`CancellationToken`] that is cancelled when a newer dispatch of the
///   same command type starts.
pub trait Command: Any + Send {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        cancel: CancellationToken,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>>;
}
