//! Task identity and cooperative cancellation for dispatched commands.
//!
//! A [`TaskId`] combines the command's `TypeId` with a generation counter,
//! so multiple dispatches of the same command type stay distinguishable.
//! A [`TaskHandle`] wraps the task's `CancellationToken`; dispatching a new
//! task of the same type cancels the previous handle. Cancellation is
//! cooperative: the running task must check its token, it is never aborted.

use std::any::TypeId;

use tokio_util::sync::CancellationToken;

/// Unique identifier for a dispatched task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Higher generation values belong to more recently dispatched tasks.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Handle to a dispatched task with cooperative cancellation support.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Clone of the cancellation token, for handing to async work.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    /// Request cooperative cancellation. The task stops at its next check
    /// point; it is not forcibly aborted.
    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_id_distinguishes_generations_and_types() {
        let type_id = TypeId::of::<String>();

        let id1 = TaskId::new(type_id, 1);
        let id2 = TaskId::new(type_id, 1);
        let id3 = TaskId::new(type_id, 2);
        let id4 = TaskId::new(TypeId::of::<i32>(), 1);

        assert_eq!(id1, id2);
        assert_ne!(id1, id3, "different generation");
        assert_ne!(id1, id4, "different type");
        assert_eq!(id3.generation(), 2);
    }

    #[test]
    fn task_handle_cancel() {
        let handle = TaskHandle::new(TaskId::new(TypeId::of::<String>(), 1), CancellationToken::new());

        assert!(!handle.is_cancelled());
        handle.cancel();
        assert!(handle.is_cancelled());
    }

    #[test]
    fn cloned_handles_share_the_token() {
        let handle = TaskHandle::new(TaskId::new(TypeId::of::<String>(), 1), CancellationToken::new());
        let clone = handle.clone();
        let token = handle.cancellation_token();

        handle.cancel();

        assert!(clone.is_cancelled());
        assert!(token.is_cancelled());
    }
}
