//! Delete-user action cache + command.
//!
//! The UI sets [`DeleteUserInput`], dispatches [`DeleteUserCommand`], and
//! watches [`DeleteUserCompute`]. On `Deleted` it triggers a full refetch of
//! both tables (never a local row removal, so the total and the aggregate
//! stay consistent) and resets the cache to `Idle`; on `Error` the displayed
//! rows stay untouched and the message is surfaced.

use std::any::Any;

use roster_states::{
    Command, CommandSnapshot, Compute, LatestOnlyUpdater, State, assign_impl, state_assign_impl,
};
use tokio_util::sync::CancellationToken;
use ustr::Ustr;

use super::api;
use crate::config::AppConfig;

/// Strongly-typed delete action state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeleteUserState {
    /// No active delete.
    #[default]
    Idle,

    /// The delete call is running.
    InFlight { uuid: Ustr },

    /// The backend confirmed the delete.
    Deleted { uuid: Ustr },

    /// The delete failed.
    Error { uuid: Ustr, message: String },
}

/// Compute-shaped cache for the delete action.
#[derive(Debug, Clone, Default)]
pub struct DeleteUserCompute {
    pub state: DeleteUserState,
}

impl DeleteUserCompute {
    pub fn is_in_flight(&self) -> bool {
        matches!(self.state, DeleteUserState::InFlight { .. })
    }

    pub fn state(&self) -> &DeleteUserState {
        &self.state
    }
}

impl Compute for DeleteUserCompute {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Target of the next [`DeleteUserCommand`] dispatch.
#[derive(Debug, Clone, Default)]
pub struct DeleteUserInput {
    pub uuid: Option<Ustr>,
}

impl State for DeleteUserInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

/// Manual-only command that deletes one user.
#[derive(Debug, Default)]
pub struct DeleteUserCommand;

impl Command for DeleteUserCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        cancel: CancellationToken,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send>> {
        let input: DeleteUserInput = snap.state::<DeleteUserInput>();
        let config: AppConfig = snap.state::<AppConfig>();

        Box::pin(async move {
            let Some(uuid) = input.uuid else {
                updater.set(DeleteUserCompute {
                    state: DeleteUserState::Error {
                        uuid: Ustr::from(""),
                        message: "DeleteUserCommand: missing required input field `uuid`"
                            .to_owned(),
                    },
                });
                return;
            };

            updater.set(DeleteUserCompute {
                state: DeleteUserState::InFlight { uuid },
            });

            let outcome = api::delete_user(config.api_url().as_str(), uuid.as_str()).await;
            if cancel.is_cancelled() {
                return;
            }

            match outcome {
                Ok(()) => {
                    log::info!("user {uuid} deleted");
                    updater.set(DeleteUserCompute {
                        state: DeleteUserState::Deleted { uuid },
                    });
                }
                Err(err) => {
                    log::error!("delete of user {uuid} failed: {err}");
                    updater.set(DeleteUserCompute {
                        state: DeleteUserState::Error {
                            uuid,
                            message: err.to_string(),
                        },
                    });
                }
            }
        })
    }
}
