//! Daily-record cache + refresh command.
//!
//! Same shape as the users list: a compute-shaped cache replaced by a
//! manual-only command. The client only ever holds the latest snapshot of
//! the aggregate.

use std::any::Any;

use roster_states::{Command, CommandSnapshot, Compute, LatestOnlyUpdater, assign_impl};
use tokio_util::sync::CancellationToken;

use super::api;
use super::rows::{self, DailyRow};
use super::FetchStatus;
use crate::config::AppConfig;

/// Compute-shaped cache for the daily aggregate record.
#[derive(Debug, Clone, Default)]
pub struct DailyRecordCompute {
    pub status: FetchStatus,
    /// Last successfully fetched snapshot; kept across failures.
    pub record: Option<DailyRow>,
}

impl DailyRecordCompute {
    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.status.error_message()
    }
}

impl Compute for DailyRecordCompute {
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

/// Manual-only command that fetches the daily aggregate record.
#[derive(Debug, Default)]
pub struct RefreshDailyRecordCommand;

impl Command for RefreshDailyRecordCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        cancel: CancellationToken,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send>> {
        let config: AppConfig = snap.state::<AppConfig>();
        let current: DailyRecordCompute = snap.compute::<DailyRecordCompute>();

        Box::pin(async move {
            updater.set(DailyRecordCompute {
                status: FetchStatus::Loading,
                ..current.clone()
            });

            let outcome = api::daily_record(config.api_url().as_str()).await;
            if cancel.is_cancelled() {
                return;
            }

            match outcome {
                Ok(response) => {
                    updater.set(DailyRecordCompute {
                        status: FetchStatus::Loaded,
                        record: Some(rows::map_daily_record(&response.data)),
                    });
                }
                Err(err) => {
                    log::error!("daily record refresh failed: {err}");
                    updater.set(DailyRecordCompute {
                        status: FetchStatus::Error(err.to_string()),
                        ..current
                    });
                }
            }
        })
    }
}
