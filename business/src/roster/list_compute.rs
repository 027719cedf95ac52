//! Users-list cache + refresh command.
//!
//! Follows the workspace pattern:
//! - [`UsersListCompute`] is a compute-shaped cache storing the latest
//!   status, rows, and total;
//! - [`RefreshUsersCommand`] is a manual-only command that performs the
//!   network request and replaces the cache through its updater.
//!
//! Rapid re-dispatches (typing in the search box) cannot apply out of
//! order: the updater drops writes from superseded generations, so the
//! applied batch always answers the newest query.

use std::any::Any;

use chrono::{DateTime, Utc};
use roster_states::{
    Command, CommandSnapshot, Compute, LatestOnlyUpdater, State, assign_impl, state_assign_impl,
};
use tokio_util::sync::CancellationToken;

use super::api;
use super::rows::{self, UserRow};
use super::FetchStatus;
use crate::config::AppConfig;

/// Compute-shaped cache for the users table.
///
/// Status and data live side by side so a refresh or failure never wipes
/// previously loaded rows: `Loading` and `Error` keep the old batch, and a
/// successful fetch replaces rows and total in one update.
#[derive(Debug, Clone, Default)]
pub struct UsersListCompute {
    pub status: FetchStatus,
    pub rows: Vec<UserRow>,
    pub total: usize,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl UsersListCompute {
    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.status.error_message()
    }
}

impl Compute for UsersListCompute {
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

/// Input state for [`RefreshUsersCommand`].
///
/// `search` is the SearchQuery: `None` means no search was ever performed
/// (the request carries no filter parameter), while `Some("")` is a valid
/// empty query once the user has touched the search box.
#[derive(Debug, Clone, Default)]
pub struct UsersQueryInput {
    pub search: Option<String>,
}

impl State for UsersQueryInput {
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

/// Manual-only command that fetches the users list.
///
/// Dispatch explicitly via `ctx.dispatch::<RefreshUsersCommand>()` or queue
/// it with `ctx.enqueue_command`.
#[derive(Debug, Default)]
pub struct RefreshUsersCommand;

impl Command for RefreshUsersCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        cancel: CancellationToken,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send>> {
        let input: UsersQueryInput = snap.state::<UsersQueryInput>();
        let config: AppConfig = snap.state::<AppConfig>();
        let current: UsersListCompute = snap.compute::<UsersListCompute>();

        Box::pin(async move {
            let api_base_url = config.api_url();

            updater.set(UsersListCompute {
                status: FetchStatus::Loading,
                ..current.clone()
            });

            let outcome = api::list_users(api_base_url.as_str(), input.search.as_deref()).await;
            if cancel.is_cancelled() {
                // A newer dispatch owns the cache now.
                return;
            }

            match outcome {
                Ok(response) => {
                    let total = response.total();
                    match rows::map_users(&response.data) {
                        Ok(mapped) => {
                            log::info!("fetched {} users (total {total})", mapped.len());
                            updater.set(UsersListCompute {
                                status: FetchStatus::Loaded,
                                rows: mapped,
                                total,
                                fetched_at: Some(Utc::now()),
                            });
                        }
                        Err(err) => {
                            log::error!("users response failed to map: {err}");
                            updater.set(UsersListCompute {
                                status: FetchStatus::Error(err.to_string()),
                                ..current
                            });
                        }
                    }
                }
                Err(err) => {
                    log::error!("users refresh failed: {err}");
                    updater.set(UsersListCompute {
                        status: FetchStatus::Error(err.to_string()),
                        ..current
                    });
                }
            }
        })
    }
}
