#![allow(dead_code)]

use egui_kittest::Harness;
use roster_business::{DailyRecordCompute, FetchStatus, UsersListCompute};
use roster_ui::RosterApp;
use roster_ui::state::State;
use wiremock::MockServer;

pub async fn start_server() -> MockServer {
    let _ = env_logger::builder().is_test(true).try_init();
    MockServer::start().await
}

/// One user whose name arrives as the legacy JSON-embedded string.
pub fn users_body() -> serde_json::Value {
    serde_json::json!({
        "data": [{
            "uuid": "a",
            "name": "{\"first\":\"Jo\",\"last\":\"Doe\"}",
            "gender": "F",
            "age": 30,
            "location": "NY"
        }]
    })
}

pub fn empty_users_body() -> serde_json::Value {
    serde_json::json!({ "data": [] })
}

pub fn daily_body() -> serde_json::Value {
    serde_json::json!({
        "data": {
            "uuid": "d1",
            "date": "2024-03-15",
            "total_user": 7,
            "male_count": 3,
            "female_count": 4,
            "male_avg_age": 31.5,
            "female_avg_age": 28.0
        }
    })
}

/// Build the app against the mock server. Call only after every mock is
/// mounted: the constructor dispatches the initial fetches.
pub fn app_harness(base_url: String) -> Harness<'static, RosterApp> {
    let state = State::test(base_url);
    let app = RosterApp::new(state);
    Harness::new_eframe(|_| app)
}

/// Step the harness with pauses so in-flight responses can land.
pub async fn run_frames(harness: &mut Harness<'_, RosterApp>, frames: usize) {
    for _ in 0..frames {
        harness.step();
        tokio::time::sleep(std::time::Duration::from_millis(40)).await;
    }
}

/// Poll frames until `ready` holds, panicking after a generous bound.
pub async fn wait_until(
    harness: &mut Harness<'_, RosterApp>,
    what: &str,
    ready: impl Fn(&RosterApp) -> bool,
) {
    const MAX_POLL_FRAMES: usize = 120;
    for _ in 0..MAX_POLL_FRAMES {
        harness.step();
        tokio::time::sleep(std::time::Duration::from_millis(25)).await;
        if ready(harness.state()) {
            return;
        }
    }
    panic!("{what} did not happen within {MAX_POLL_FRAMES} frames");
}

pub fn users_loaded(app: &RosterApp) -> bool {
    app.state
        .ctx
        .cached::<UsersListCompute>()
        .is_some_and(|users| users.status == FetchStatus::Loaded)
}

pub fn daily_record_loaded(app: &RosterApp) -> bool {
    app.state
        .ctx
        .cached::<DailyRecordCompute>()
        .is_some_and(|record| record.status == FetchStatus::Loaded)
}
