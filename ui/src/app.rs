use std::time::Duration;

use roster_business::{
    DailyRecordCompute, DeleteUserCompute, RefreshDailyRecordCommand, RefreshUsersCommand,
    UsersListCompute,
};

use crate::state::State;
use crate::widgets;

pub struct RosterApp {
    pub state: State,
}

impl RosterApp {
    /// Called once before the first frame. Kicks off both initial fetches;
    /// they run in parallel and land independently.
    pub fn new(mut state: State) -> Self {
        state.ctx.dispatch::<RefreshUsersCommand>();
        state.ctx.dispatch::<RefreshDailyRecordCommand>();
        Self { state }
    }

    fn any_fetch_in_flight(&self) -> bool {
        let ctx = &self.state.ctx;
        ctx.cached::<UsersListCompute>()
            .is_some_and(UsersListCompute::is_loading)
            || ctx
                .cached::<DailyRecordCompute>()
                .is_some_and(DailyRecordCompute::is_loading)
            || ctx
                .cached::<DeleteUserCompute>()
                .is_some_and(DeleteUserCompute::is_in_flight)
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply queued async results before rendering.
        self.state.ctx.sync_computes();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.strong("Roster Admin");
                widgets::env_version(ui);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::roster_panel(&mut self.state.ctx, ui);
        });

        self.state.ctx.run_computed();

        // Keep frames coming while async work is outstanding, so results
        // appear without user input.
        let work_pending =
            self.state.ctx.pending_commands() > 0 || self.any_fetch_in_flight();

        self.state.ctx.flush_commands();

        if work_pending {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
