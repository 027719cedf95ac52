use roster_business::{
    AppConfig, DailyRecordCompute, DeleteUserCompute, DeleteUserInput, UsersListCompute,
    UsersQueryInput,
};
use roster_states::StateCtx;

use crate::widgets::RosterPanelState;

/// The main application state: a [`StateCtx`] with every roster state and
/// compute registered.
pub struct State {
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(AppConfig::default())
    }
}

impl State {
    fn with_config(config: AppConfig) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(config);
        ctx.add_state(UsersQueryInput::default());
        ctx.add_state(DeleteUserInput::default());
        ctx.add_state(RosterPanelState::default());
        ctx.record_compute(UsersListCompute::default());
        ctx.record_compute(DailyRecordCompute::default());
        ctx.record_compute(DeleteUserCompute::default());

        Self { ctx }
    }

    /// State wired to an explicit base URL, for integration tests.
    pub fn test(base_url: String) -> Self {
        Self::with_config(AppConfig::new(base_url))
    }
}
