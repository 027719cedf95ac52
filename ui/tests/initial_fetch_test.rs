//! Initial-load behavior: both fetches fire once when the app is created,
//! results render, and no repeat fetch happens on subsequent frames.

mod common;

use common::{
    app_harness, daily_body, daily_record_loaded, run_frames, start_server, users_body,
    users_loaded, wait_until,
};
use kittest::Queryable;
use wiremock::matchers::{method, path, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn users_and_daily_record_load_once_on_app_create() {
    let server = start_server().await;

    // The initial query is null, so the request must carry no parameter.
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(query_param_is_missing("search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_body()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/daily-record"))
        .respond_with(ResponseTemplate::new(200).set_body_json(daily_body()))
        .expect(1)
        .mount(&server)
        .await;

    let mut harness = app_harness(server.uri());
    wait_until(&mut harness, "users list load", users_loaded).await;
    wait_until(&mut harness, "daily record load", daily_record_loaded).await;

    // The legacy JSON-embedded name was decomposed into first/last cells.
    assert!(harness.query_by_label("Jo").is_some(), "first name cell");
    assert!(harness.query_by_label("Doe").is_some(), "last name cell");
    assert!(
        harness.query_by_label_contains("Total Users: 1").is_some(),
        "total users line"
    );
    assert!(
        harness.query_by_label_contains("2024-03-15").is_some(),
        "daily record date cell"
    );

    // Extra frames must not re-fetch; the mock expectations (exactly one
    // call per endpoint) are verified when the server drops.
    run_frames(&mut harness, 3).await;
}
