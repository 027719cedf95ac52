//! The roster admin screen.
//!
//! Layout, top to bottom: toolbar (refresh, server-side search), delete
//! error surface, the daily aggregate table, the total-users line, and the
//! users table with its global filter.
//!
//! The panel only reads computes and enqueues commands; the app loop
//! flushes the queue end-of-frame.

use chrono::Local;
use egui::{Color32, Response, Ui};
use roster_business::{
    DailyRecordCompute, DeleteUserCommand, DeleteUserCompute, DeleteUserInput, DeleteUserState,
    RefreshDailyRecordCommand, RefreshUsersCommand, UsersListCompute, UsersQueryInput,
};
use roster_states::StateCtx;
use ustr::Ustr;

use super::schema::{daily_record_columns, user_columns};
use super::state::RosterPanelState;
use crate::widgets::table::data_table;

/// Displays the roster admin panel.
pub fn roster_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let response = ui.vertical(|ui| {
        sync_search_query(state_ctx);
        handle_finished_delete(state_ctx);

        toolbar(state_ctx, ui);
        delete_status_banner(state_ctx, ui);

        ui.add_space(8.0);
        daily_record_section(state_ctx, ui);

        ui.add_space(12.0);
        users_section(state_ctx, ui);
    });

    response.response
}

/// Record a changed search box into the query state and re-trigger both
/// fetches, mirroring "refetch whenever the SearchQuery changes". A box
/// that was never touched keeps the query null, so the request carries no
/// filter parameter; once touched, even an empty box is a valid query.
fn sync_search_query(state_ctx: &mut StateCtx) {
    let search_input = state_ctx.state::<RosterPanelState>().search_input.clone();
    let recorded = state_ctx.state::<UsersQueryInput>().search.clone();

    let diverged = match &recorded {
        Some(query) => *query != search_input,
        None => !search_input.is_empty(),
    };

    if diverged {
        state_ctx.update::<UsersQueryInput>(|query| query.search = Some(search_input));
        state_ctx.enqueue_command::<RefreshUsersCommand>();
        state_ctx.enqueue_command::<RefreshDailyRecordCommand>();
    }
}

/// A confirmed delete triggers a full refresh of both tables (never a
/// local row removal, so the total and the aggregate stay consistent) and
/// resets the action cache.
fn handle_finished_delete(state_ctx: &mut StateCtx) {
    let deleted = matches!(
        state_ctx
            .cached::<DeleteUserCompute>()
            .map(DeleteUserCompute::state),
        Some(DeleteUserState::Deleted { .. })
    );

    if deleted {
        state_ctx.enqueue_command::<RefreshUsersCommand>();
        state_ctx.enqueue_command::<RefreshDailyRecordCommand>();
        state_ctx.update_compute::<DeleteUserCompute>(|compute| {
            compute.state = DeleteUserState::Idle;
        });
    }
}

fn toolbar(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let mut search_input = state_ctx.state::<RosterPanelState>().search_input.clone();

    ui.horizontal(|ui| {
        if ui.button("Refresh").clicked() {
            state_ctx.enqueue_command::<RefreshUsersCommand>();
            state_ctx.enqueue_command::<RefreshDailyRecordCommand>();
        }

        ui.label("Search");
        ui.add(egui::TextEdit::singleline(&mut search_input).hint_text("server-side search"));

        let (loading, fetched_at) = state_ctx
            .cached::<UsersListCompute>()
            .map(|users| (users.is_loading(), users.fetched_at))
            .unwrap_or((false, None));

        if loading {
            ui.spinner();
            ui.label("Loading...");
        } else if let Some(at) = fetched_at {
            ui.weak(format!(
                "updated {}",
                at.with_timezone(&Local).format("%H:%M:%S")
            ));
        }
    });

    state_ctx.state_mut::<RosterPanelState>().search_input = search_input;
}

fn delete_status_banner(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let failed = match state_ctx
        .cached::<DeleteUserCompute>()
        .map(DeleteUserCompute::state)
    {
        Some(DeleteUserState::Error { uuid, message }) => Some((*uuid, message.clone())),
        _ => None,
    };

    if let Some((uuid, message)) = failed {
        ui.horizontal(|ui| {
            let target = if uuid.is_empty() {
                String::new()
            } else {
                format!(" {uuid}")
            };
            ui.colored_label(Color32::RED, format!("Failed to delete{target}: {message}"));
            if ui.button("Dismiss").clicked() {
                state_ctx.update_compute::<DeleteUserCompute>(|compute| {
                    compute.state = DeleteUserState::Idle;
                });
            }
        });
    } else if state_ctx
        .cached::<DeleteUserCompute>()
        .is_some_and(DeleteUserCompute::is_in_flight)
    {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Deleting...");
        });
    }
}

fn daily_record_section(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let Some(compute) = state_ctx.cached::<DailyRecordCompute>() else {
        return;
    };

    if let Some(message) = compute.error_message() {
        ui.colored_label(Color32::RED, format!("Error: {message}"));
    }

    if compute.is_loading() && compute.record.is_none() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading daily record...");
        });
    }

    if let Some(record) = &compute.record {
        // The renderer takes a row sequence; the aggregate is its only row.
        let rows = std::slice::from_ref(record);
        data_table(ui, "daily_record_table", &daily_record_columns(), rows, None);
    }
}

fn users_section(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let total = state_ctx
        .cached::<UsersListCompute>()
        .map(|users| users.total)
        .unwrap_or(0);
    ui.label(format!("Total Users: {total}"));

    let mut filter_input = state_ctx.state::<RosterPanelState>().filter_input.clone();
    let mut delete_requested: Option<Ustr> = None;

    if let Some(users) = state_ctx.cached::<UsersListCompute>() {
        if let Some(message) = users.error_message() {
            ui.colored_label(Color32::RED, format!("Error: {message}"));
        }

        let table = egui::ScrollArea::vertical()
            .show(ui, |ui| {
                data_table(
                    ui,
                    "users_table",
                    &user_columns(),
                    &users.rows,
                    Some(&mut filter_input),
                )
            })
            .inner;
        if let Some(index) = table.activated_row {
            delete_requested = users.rows.get(index).map(|row| row.id);
        }
    }

    state_ctx.state_mut::<RosterPanelState>().filter_input = filter_input;

    if let Some(uuid) = delete_requested {
        state_ctx.update::<DeleteUserInput>(|input| input.uuid = Some(uuid));
        state_ctx.enqueue_command::<DeleteUserCommand>();
    }
}

#[cfg(test)]
mod roster_panel_tests {
    use egui_kittest::Harness;
    use kittest::Queryable;
    use roster_business::{DailyRow, DisplayName, FetchStatus, UserRow};

    use super::*;
    use crate::state::State;

    fn test_state() -> State {
        State::test("http://test".to_owned())
    }

    fn test_users() -> Vec<UserRow> {
        vec![
            UserRow {
                ordinal: 1,
                id: Ustr::from("a"),
                name: DisplayName::Split {
                    first: "Jo".to_owned(),
                    last: "Doe".to_owned(),
                },
                gender: "F".to_owned(),
                age: 30,
                location: "NY".to_owned(),
            },
            UserRow {
                ordinal: 2,
                id: Ustr::from("b"),
                name: DisplayName::Full("Ann Lee".to_owned()),
                gender: "F".to_owned(),
                age: 41,
                location: "LA".to_owned(),
            },
        ]
    }

    fn load_users(state: &mut State) {
        state.ctx.update_compute::<UsersListCompute>(|users| {
            users.status = FetchStatus::Loaded;
            users.rows = test_users();
            users.total = 2;
        });
    }

    fn panel_harness(state: State) -> Harness<'static, State> {
        Harness::new_ui_state(
            |ui, state: &mut State| {
                roster_panel(&mut state.ctx, ui);
            },
            state,
        )
    }

    #[test]
    fn table_headers_and_groups_exist() {
        let mut state = test_state();
        load_users(&mut state);

        let harness = panel_harness(state);

        for label in ["Name", "Info", "No", "First Name", "Last Name", "Age", "Gender", "Location", "Action"] {
            assert!(
                harness.query_by_label_contains(label).is_some(),
                "{label} header should exist"
            );
        }
    }

    #[test]
    fn user_rows_display_with_data() {
        let mut state = test_state();
        load_users(&mut state);

        let harness = panel_harness(state);

        for label in ["Jo", "Doe", "Ann Lee", "NY", "LA", "30", "41"] {
            assert!(
                harness.query_by_label_contains(label).is_some(),
                "row value {label} should be displayed"
            );
        }
    }

    #[test]
    fn total_users_line_shows_the_total() {
        let mut state = test_state();
        load_users(&mut state);

        let harness = panel_harness(state);

        assert!(
            harness.query_by_label_contains("Total Users: 2").is_some(),
            "total users line should be displayed"
        );
    }

    #[test]
    fn each_row_has_a_delete_button() {
        let mut state = test_state();
        load_users(&mut state);

        let harness = panel_harness(state);

        let delete_count = harness.query_all_by_label("Delete").count();
        assert_eq!(delete_count, 2, "one Delete button per row");
    }

    #[test]
    fn global_filter_narrows_and_restores_rows() {
        let mut state = test_state();
        load_users(&mut state);

        let mut harness = panel_harness(state);
        harness.step();

        // Case-insensitive substring match on any column.
        harness
            .state_mut()
            .ctx
            .update::<RosterPanelState>(|panel| panel.filter_input = "LEE".to_owned());
        harness.step();

        assert!(harness.query_by_label_contains("Ann Lee").is_some());
        assert!(
            harness.query_by_label("Jo").is_none(),
            "non-matching rows should be hidden"
        );

        // A needle matching nothing hides every row but keeps the headers.
        harness
            .state_mut()
            .ctx
            .update::<RosterPanelState>(|panel| panel.filter_input = "zzz".to_owned());
        harness.step();

        assert!(harness.query_by_label("Jo").is_none());
        assert!(harness.query_by_label_contains("Ann Lee").is_none());
        assert!(harness.query_by_label_contains("First Name").is_some());

        // Clearing the filter restores the full batch.
        harness
            .state_mut()
            .ctx
            .update::<RosterPanelState>(|panel| panel.filter_input = String::new());
        harness.step();

        assert!(harness.query_by_label("Jo").is_some());
        assert!(harness.query_by_label_contains("Ann Lee").is_some());
    }

    #[test]
    fn clicking_delete_records_the_row_id_and_queues_the_command() {
        let mut state = test_state();
        load_users(&mut state);

        let mut harness = panel_harness(state);
        harness.step();

        let delete_button = harness.query_all_by_label("Delete").next();
        assert!(delete_button.is_some(), "Delete button should be present");
        delete_button.unwrap().click();
        harness.step();

        assert_eq!(
            harness.state().ctx.state::<DeleteUserInput>().uuid,
            Some(Ustr::from("a")),
            "the clicked row's id should be recorded"
        );
        assert!(
            harness.state().ctx.pending_commands() > 0,
            "the delete command should be queued for the app loop"
        );
    }

    #[test]
    fn a_fetch_error_keeps_previous_rows_visible() {
        let mut state = test_state();
        load_users(&mut state);
        state.ctx.update_compute::<UsersListCompute>(|users| {
            users.status = FetchStatus::Error("API returned status: 500".to_owned());
        });

        let harness = panel_harness(state);

        assert!(
            harness.query_by_label_contains("API returned status: 500").is_some(),
            "the fetch error should be surfaced"
        );
        assert!(
            harness.query_by_label("Jo").is_some(),
            "previously loaded rows must survive a failed refresh"
        );
        assert!(
            harness.query_by_label_contains("Total Users: 2").is_some(),
            "the total must survive a failed refresh"
        );
    }

    #[test]
    fn a_failed_delete_is_surfaced_and_dismissable() {
        let mut state = test_state();
        load_users(&mut state);
        state.ctx.update_compute::<DeleteUserCompute>(|compute| {
            compute.state = DeleteUserState::Error {
                uuid: Ustr::from("a"),
                message: "API returned status: 500".to_owned(),
            };
        });

        let mut harness = panel_harness(state);
        harness.step();

        assert!(
            harness.query_by_label_contains("Failed to delete a").is_some(),
            "the delete failure should be surfaced"
        );
        assert!(
            harness.query_by_label("Jo").is_some(),
            "rows stay untouched on a failed delete"
        );

        let dismiss = harness.query_by_label("Dismiss");
        assert!(dismiss.is_some(), "Dismiss button should be present");
        dismiss.unwrap().click();
        harness.step();

        assert_eq!(
            harness.state().ctx.cached::<DeleteUserCompute>().map(|c| c.state.clone()),
            Some(DeleteUserState::Idle),
            "dismissing clears the action state"
        );
    }

    #[test]
    fn a_confirmed_delete_queues_a_full_refetch_and_resets() {
        let mut state = test_state();
        load_users(&mut state);
        state.ctx.update_compute::<DeleteUserCompute>(|compute| {
            compute.state = DeleteUserState::Deleted {
                uuid: Ustr::from("a"),
            };
        });

        let mut harness = panel_harness(state);
        harness.step();

        assert_eq!(
            harness.state().ctx.pending_commands(),
            2,
            "both refresh commands should be queued"
        );
        assert_eq!(
            harness.state().ctx.cached::<DeleteUserCompute>().map(|c| c.state.clone()),
            Some(DeleteUserState::Idle),
            "the action cache resets once the refetch is queued"
        );
    }

    #[test]
    fn editing_the_search_box_records_the_query_and_queues_refetches() {
        let state = test_state();

        let mut harness = panel_harness(state);
        harness.step();

        // Untouched box: the query stays null and nothing is queued.
        assert_eq!(harness.state().ctx.state::<UsersQueryInput>().search, None);
        assert_eq!(harness.state().ctx.pending_commands(), 0);

        harness
            .state_mut()
            .ctx
            .update::<RosterPanelState>(|panel| panel.search_input = "ann".to_owned());
        harness.step();

        assert_eq!(
            harness.state().ctx.state::<UsersQueryInput>().search,
            Some("ann".to_owned())
        );
        assert_eq!(
            harness.state().ctx.pending_commands(),
            2,
            "both fetches re-trigger on a SearchQuery change"
        );
    }

    #[test]
    fn daily_record_table_renders_the_aggregate() {
        let mut state = test_state();
        state.ctx.update_compute::<DailyRecordCompute>(|compute| {
            compute.status = FetchStatus::Loaded;
            compute.record = Some(DailyRow {
                id: "d1".to_owned(),
                date: "2024-03-15".to_owned(),
                total_user: Some(7),
                male_count: 3,
                female_count: 4,
                male_avg_age: 31.5,
                female_avg_age: 28.0,
            });
        });

        let harness = panel_harness(state);

        for label in ["Daily Record", "Male", "Female", "Total User", "2024-03-15", "31.5", "28.0"] {
            assert!(
                harness.query_by_label_contains(label).is_some(),
                "daily record value {label} should be displayed"
            );
        }
    }
}
