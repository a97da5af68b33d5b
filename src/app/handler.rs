//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and worker responses, translating them into state changes and action
//! sequences. It serves as the primary control flow coordinator for the
//! application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the terminal shell or the operations worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Navigation**: `KeyDown`, `KeyUp`, `Select`, `Back`, `Navigate`
//! - **Operations**: `Refresh`, `Submit`, `DeleteEvent` and its confirmation
//! - **Input**: `Char`, `Backspace`, field traversal, status cycling
//! - **Search**: `SearchMode`, focus switching, `ExitSearch`
//! - **Worker**: `WorkerResponse` with typed outcome variants

use crate::app::form::{FormMode, FormState};
use crate::app::modes::{InputMode, Route, SearchFocus};
use crate::app::state::{AppState, DetailState, FormLoad};
use crate::app::Action;
use crate::domain::error::Result;
use crate::worker::{OpsRequest, OpsResponse};

/// Events triggered by user input or worker responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes these sequentially, ensuring
/// deterministic state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Moves the table selection down by one (wraps to top).
    KeyDown,
    /// Moves the table selection up by one (wraps to bottom).
    KeyUp,
    /// Opens the detail screen for the selected event.
    Select,
    /// Leaves the current screen back to the table.
    Back,
    /// Exits the application.
    Quit,
    /// Re-fetches the current screen's data.
    Refresh,
    /// Opens the create form.
    NewEvent,
    /// Opens the edit form for the selected (or shown) event.
    EditEvent,
    /// Starts a delete, pending interactive confirmation.
    DeleteEvent,
    /// Confirms the pending delete.
    ConfirmDelete,
    /// Cancels the pending delete.
    CancelDelete,
    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating focus).
    FocusSearchBar,
    /// Focuses the filtered results (from typing focus).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query or focused form field.
    Char(char),
    /// Removes the last character from the query or focused form field.
    Backspace,
    /// Moves form focus to the next field.
    NextField,
    /// Moves form focus to the previous field.
    PrevField,
    /// Cycles the form's status field forward.
    StatusNext,
    /// Cycles the form's status field back.
    StatusPrev,
    /// Submits the form (create or update by form mode).
    Submit,
    /// Navigates to a route programmatically (startup, post-save).
    Navigate(Route),
    /// Wraps a response from the operations worker.
    ///
    /// Responses whose sequence tag is not the latest issued request are
    /// discarded without touching state.
    WorkerResponse(OpsResponse),
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// A `(should_render, actions)` pair: whether the UI needs a redraw, and
/// the side effects to execute in sequence.
///
/// # Errors
///
/// Currently infallible in practice; the `Result` keeps the signature open
/// for state transitions that can fail.
///
/// # Tracing
///
/// Each call creates a debug-level span carrying the event type.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = %event_name(event)).entered();

    match event {
        Event::KeyDown => {
            if state.route != Route::List {
                return Ok((false, vec![]));
            }
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            if state.route != Route::List {
                return Ok((false, vec![]));
            }
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::Select => {
            if state.route != Route::List {
                return Ok((false, vec![]));
            }
            let Some(selected) = state.selected_event() else {
                if matches!(state.input_mode, InputMode::Search(_)) {
                    tracing::debug!("exiting search mode (no selection)");
                    state.input_mode = InputMode::Normal;
                    state.search_query.clear();
                    state.apply_search_filter();
                    return Ok((true, vec![]));
                }
                return Ok((false, vec![]));
            };
            let id = selected.id;
            tracing::debug!(event_id = id, "opening event detail");
            let actions = enter_route(state, Route::Detail(id));
            Ok((true, actions))
        }
        Event::Back => match state.route {
            Route::Detail(_) | Route::New | Route::Edit(_) => {
                let actions = enter_route(state, Route::List);
                Ok((true, actions))
            }
            Route::List => {
                if matches!(state.input_mode, InputMode::ConfirmDelete { .. }) {
                    state.input_mode = InputMode::Normal;
                    return Ok((true, vec![]));
                }
                Ok((false, vec![]))
            }
        },
        Event::Quit => Ok((false, vec![Action::Quit])),
        Event::Refresh => match state.route {
            Route::List => {
                let seq = state.begin_request();
                Ok((true, vec![Action::PostToWorker(OpsRequest::ListEvents { seq })]))
            }
            Route::Detail(id) => {
                if !matches!(state.detail, DetailState::Loaded(_)) {
                    state.detail = DetailState::Loading;
                }
                let seq = state.begin_request();
                Ok((
                    true,
                    vec![Action::PostToWorker(OpsRequest::GetEvent { seq, id })],
                ))
            }
            Route::New | Route::Edit(_) => Ok((false, vec![])),
        },
        Event::NewEvent => {
            if state.route != Route::List {
                return Ok((false, vec![]));
            }
            let actions = enter_route(state, Route::New);
            Ok((true, actions))
        }
        Event::EditEvent => match state.route {
            Route::List => {
                let Some(selected) = state.selected_event() else {
                    return Ok((false, vec![]));
                };
                let id = selected.id;
                let actions = enter_route(state, Route::Edit(id));
                Ok((true, actions))
            }
            Route::Detail(id) => {
                let actions = enter_route(state, Route::Edit(id));
                Ok((true, actions))
            }
            Route::New | Route::Edit(_) => Ok((false, vec![])),
        },
        Event::DeleteEvent => {
            if state.route != Route::List || state.input_mode != InputMode::Normal {
                return Ok((false, vec![]));
            }
            let Some(selected) = state.selected_event() else {
                return Ok((false, vec![]));
            };
            let id = selected.id;
            tracing::debug!(event_id = id, "delete pending confirmation");
            state.input_mode = InputMode::ConfirmDelete { id };
            Ok((true, vec![]))
        }
        Event::ConfirmDelete => {
            let InputMode::ConfirmDelete { id } = state.input_mode else {
                return Ok((false, vec![]));
            };
            state.input_mode = InputMode::Normal;
            let seq = state.begin_request();
            tracing::debug!(event_id = id, "delete confirmed");
            Ok((
                true,
                vec![Action::PostToWorker(OpsRequest::DeleteEvent { seq, id })],
            ))
        }
        Event::CancelDelete => {
            if matches!(state.input_mode, InputMode::ConfirmDelete { .. }) {
                state.input_mode = InputMode::Normal;
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::SearchMode => {
            if state.route != Route::List {
                return Ok((false, vec![]));
            }
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.search_query.clear();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            if state.route != Route::List {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.route != Route::List {
                return Ok((false, vec![]));
            }
            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
                state.apply_search_filter();
                return Ok((true, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            if state.route != Route::List {
                return Ok((false, vec![]));
            }
            tracing::debug!(query = %state.search_query, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.search_query.clear();
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.route == Route::List {
                if !matches!(state.input_mode, InputMode::Search(_)) {
                    return Ok((false, vec![]));
                }
                state.search_query.push(*c);
                state.apply_search_filter();
                return Ok((true, vec![]));
            }
            if let FormLoad::Ready(form) = &mut state.form {
                form.push_char(*c);
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::Backspace => {
            if state.route == Route::List {
                if !matches!(state.input_mode, InputMode::Search(_)) {
                    return Ok((false, vec![]));
                }
                state.search_query.pop();
                state.apply_search_filter();
                return Ok((true, vec![]));
            }
            if let FormLoad::Ready(form) = &mut state.form {
                form.backspace();
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::NextField => with_ready_form(state, FormState::focus_next),
        Event::PrevField => with_ready_form(state, FormState::focus_previous),
        Event::StatusNext => with_ready_form(state, FormState::status_next),
        Event::StatusPrev => with_ready_form(state, FormState::status_previous),
        Event::Submit => {
            if !state.route.is_form() {
                return Ok((false, vec![]));
            }
            let FormLoad::Ready(form) = &state.form else {
                return Ok((false, vec![]));
            };
            let mode = form.mode;
            match form.to_draft() {
                Ok(draft) => {
                    let seq = state.begin_request();
                    let request = match mode {
                        FormMode::Create => OpsRequest::CreateEvent { seq, draft },
                        FormMode::Edit(id) => OpsRequest::UpdateEvent { seq, id, draft },
                    };
                    tracing::debug!(operation = request.operation(), "submitting form");
                    Ok((true, vec![Action::PostToWorker(request)]))
                }
                Err(error) => {
                    tracing::debug!(error = %error, "form rejected before submission");
                    state.error = Some(error.to_string());
                    Ok((true, vec![]))
                }
            }
        }
        Event::Navigate(route) => {
            let actions = enter_route(state, *route);
            Ok((true, actions))
        }
        Event::WorkerResponse(response) => {
            if !state.accepts_response(response.seq()) {
                tracing::debug!(seq = response.seq(), "discarding stale worker response");
                return Ok((false, vec![]));
            }
            state.complete_request();
            handle_response(state, response)
        }
    }
}

/// Applies a worker response whose sequence tag already matched.
fn handle_response(state: &mut AppState, response: &OpsResponse) -> Result<(bool, Vec<Action>)> {
    match response {
        OpsResponse::EventsListed { events, .. } => {
            tracing::debug!(event_count = events.len(), "event list updated");
            state.events.clone_from(events);
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        OpsResponse::EventFetched { event, .. } => {
            match state.route {
                Route::Detail(id) if id == event.id => {
                    state.detail = DetailState::Loaded(event.clone());
                }
                Route::Edit(id) if id == event.id => {
                    state.form = FormLoad::Ready(FormState::for_edit(event));
                }
                _ => {
                    tracing::debug!(event_id = event.id, "fetched event no longer relevant");
                }
            }
            Ok((true, vec![]))
        }
        OpsResponse::EventSaved { event, .. } => {
            tracing::debug!(event_id = event.id, "event saved");
            if state.route.is_form() {
                let actions = enter_route(state, Route::List);
                return Ok((true, actions));
            }
            Ok((false, vec![]))
        }
        OpsResponse::EventDeleted { id, .. } => {
            tracing::debug!(event_id = id, "event deleted");
            if state.route == Route::List {
                let seq = state.begin_request();
                return Ok((
                    true,
                    vec![Action::PostToWorker(OpsRequest::ListEvents { seq })],
                ));
            }
            Ok((false, vec![]))
        }
        OpsResponse::EventMissing { id, .. } => {
            match state.route {
                Route::Detail(rid) if rid == *id => {
                    state.detail = DetailState::Missing;
                }
                Route::Edit(rid) if rid == *id => {
                    state.form = FormLoad::Missing;
                }
                _ => {
                    state.error = Some("Event not found".to_string());
                }
            }
            Ok((true, vec![]))
        }
        OpsResponse::Failed { message, .. } => {
            state.error = Some(message.clone());
            if matches!(state.route, Route::Detail(_))
                && matches!(state.detail, DetailState::Loading)
            {
                state.detail = DetailState::Unavailable;
            }
            if matches!(state.route, Route::Edit(_)) && matches!(state.form, FormLoad::Loading) {
                state.form = FormLoad::Unavailable;
            }
            Ok((true, vec![]))
        }
    }
}

/// Switches to a route, resetting per-screen state and issuing the fetch the
/// screen mounts with.
///
/// Entering the list or detail/edit screens issues a request immediately;
/// the create form starts from defaults and issues nothing.
pub fn enter_route(state: &mut AppState, route: Route) -> Vec<Action> {
    tracing::debug!(route = %route.path(), "entering route");
    state.route = route;
    state.input_mode = InputMode::Normal;
    state.search_query.clear();

    match route {
        Route::List => {
            state.detail = DetailState::Absent;
            state.form = FormLoad::Inactive;
            state.apply_search_filter();
            let seq = state.begin_request();
            vec![Action::PostToWorker(OpsRequest::ListEvents { seq })]
        }
        Route::Detail(id) => {
            state.detail = DetailState::Loading;
            state.form = FormLoad::Inactive;
            let seq = state.begin_request();
            vec![Action::PostToWorker(OpsRequest::GetEvent { seq, id })]
        }
        Route::Edit(id) => {
            state.detail = DetailState::Absent;
            state.form = FormLoad::Loading;
            let seq = state.begin_request();
            vec![Action::PostToWorker(OpsRequest::GetEvent { seq, id })]
        }
        Route::New => {
            state.detail = DetailState::Absent;
            state.form = FormLoad::Ready(FormState::for_create(chrono::Utc::now()));
            state.error = None;
            vec![]
        }
    }
}

/// Runs a mutation against the form when it is editable.
fn with_ready_form(
    state: &mut AppState,
    mutate: impl FnOnce(&mut FormState),
) -> Result<(bool, Vec<Action>)> {
    if let FormLoad::Ready(form) = &mut state.form {
        mutate(form);
        return Ok((true, vec![]));
    }
    Ok((false, vec![]))
}

/// Short event name for span fields.
fn event_name(event: &Event) -> &'static str {
    match event {
        Event::KeyDown => "KeyDown",
        Event::KeyUp => "KeyUp",
        Event::Select => "Select",
        Event::Back => "Back",
        Event::Quit => "Quit",
        Event::Refresh => "Refresh",
        Event::NewEvent => "NewEvent",
        Event::EditEvent => "EditEvent",
        Event::DeleteEvent => "DeleteEvent",
        Event::ConfirmDelete => "ConfirmDelete",
        Event::CancelDelete => "CancelDelete",
        Event::SearchMode => "SearchMode",
        Event::FocusSearchBar => "FocusSearchBar",
        Event::FocusResults => "FocusResults",
        Event::ExitSearch => "ExitSearch",
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::NextField => "NextField",
        Event::PrevField => "PrevField",
        Event::StatusNext => "StatusNext",
        Event::StatusPrev => "StatusPrev",
        Event::Submit => "Submit",
        Event::Navigate(_) => "Navigate",
        Event::WorkerResponse(_) => "WorkerResponse",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EventRecord, EventStatus};
    use crate::ui::Theme;
    use chrono::{TimeZone, Utc};

    fn new_state() -> AppState {
        AppState::new(Theme::default())
    }

    fn record(id: i64, title: &str) -> EventRecord {
        EventRecord {
            id,
            title: title.to_string(),
            start_date: Utc.with_ymd_and_hms(2024, 4, 1, 18, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 4, 1, 21, 0, 0).unwrap(),
            price: 10.0,
            status: EventStatus::Started,
        }
    }

    fn issued_request(actions: &[Action]) -> &OpsRequest {
        match actions.first() {
            Some(Action::PostToWorker(request)) => request,
            other => panic!("expected a worker request, got {other:?}"),
        }
    }

    /// Drives the state onto the list route with the given events loaded.
    fn with_listed_events(state: &mut AppState, events: Vec<EventRecord>) {
        let actions = enter_route(state, Route::List);
        let seq = issued_request(&actions).seq();
        handle_event(
            state,
            &Event::WorkerResponse(OpsResponse::EventsListed { seq, events }),
        )
        .unwrap();
    }

    #[test]
    fn entering_the_list_fetches_all_events() {
        let mut state = new_state();
        let (_, actions) = handle_event(&mut state, &Event::Navigate(Route::List)).unwrap();
        assert!(matches!(
            issued_request(&actions),
            OpsRequest::ListEvents { .. }
        ));
        assert!(state.loading);
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut state = new_state();
        let first = enter_route(&mut state, Route::List);
        let stale_seq = issued_request(&first).seq();

        // The user navigates on before the list answer arrives.
        enter_route(&mut state, Route::Detail(3));

        let (rendered, actions) = handle_event(
            &mut state,
            &Event::WorkerResponse(OpsResponse::EventsListed {
                seq: stale_seq,
                events: vec![record(1, "late arrival")],
            }),
        )
        .unwrap();
        assert!(!rendered);
        assert!(actions.is_empty());
        assert!(state.events.is_empty());
        assert!(state.loading, "the detail fetch is still in flight");
    }

    #[test]
    fn select_opens_the_detail_screen() {
        let mut state = new_state();
        with_listed_events(&mut state, vec![record(5, "Quiz night")]);

        let (_, actions) = handle_event(&mut state, &Event::Select).unwrap();
        assert_eq!(state.route, Route::Detail(5));
        assert!(matches!(
            issued_request(&actions),
            OpsRequest::GetEvent { id: 5, .. }
        ));
        assert_eq!(state.detail, DetailState::Loading);
    }

    #[test]
    fn new_form_starts_from_defaults_and_submits_a_create() {
        let mut state = new_state();
        let (_, actions) = handle_event(&mut state, &Event::Navigate(Route::New)).unwrap();
        assert!(actions.is_empty(), "the create form issues no fetch");

        let FormLoad::Ready(form) = &state.form else {
            panic!("expected an editable form");
        };
        assert_eq!(form.title, "");
        assert_eq!(form.status, EventStatus::Started);

        for c in "Open mic".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        // Move focus to the price field and type a value.
        for _ in 0..3 {
            handle_event(&mut state, &Event::NextField).unwrap();
        }
        for c in "12.50".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }

        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        match issued_request(&actions) {
            OpsRequest::CreateEvent { draft, .. } => {
                assert_eq!(draft.title, "Open mic");
                assert!((draft.price - 12.5).abs() < f64::EPSILON);
            }
            other => panic!("expected CreateEvent, got {other:?}"),
        }
    }

    #[test]
    fn edit_form_prefills_and_submits_an_update() {
        let mut state = new_state();
        let (_, actions) = handle_event(&mut state, &Event::Navigate(Route::Edit(5))).unwrap();
        let seq = issued_request(&actions).seq();
        assert_eq!(state.form, FormLoad::Loading);

        handle_event(
            &mut state,
            &Event::WorkerResponse(OpsResponse::EventFetched {
                seq,
                event: record(5, "Quiz night"),
            }),
        )
        .unwrap();
        let FormLoad::Ready(form) = &state.form else {
            panic!("expected a prefilled form");
        };
        assert_eq!(form.title, "Quiz night");

        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(matches!(
            issued_request(&actions),
            OpsRequest::UpdateEvent { id: 5, .. }
        ));
    }

    #[test]
    fn saving_navigates_back_to_the_list() {
        let mut state = new_state();
        handle_event(&mut state, &Event::Navigate(Route::New)).unwrap();
        if let FormLoad::Ready(form) = &mut state.form {
            form.title = "Open mic".to_string();
            form.price = "0".to_string();
        }
        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        let seq = issued_request(&actions).seq();

        let (_, actions) = handle_event(
            &mut state,
            &Event::WorkerResponse(OpsResponse::EventSaved {
                seq,
                event: record(8, "Open mic"),
            }),
        )
        .unwrap();
        assert_eq!(state.route, Route::List);
        assert!(matches!(
            issued_request(&actions),
            OpsRequest::ListEvents { .. }
        ));
    }

    #[test]
    fn rejected_form_input_keeps_the_screen_and_sets_the_message() {
        let mut state = new_state();
        handle_event(&mut state, &Event::Navigate(Route::New)).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(actions.is_empty(), "no request for invalid input");
        let message = state.error.clone().expect("error message expected");
        assert!(message.contains("Title is required"));
        assert!(matches!(state.form, FormLoad::Ready(_)));
    }

    #[test]
    fn failed_save_keeps_the_form_contents() {
        let mut state = new_state();
        handle_event(&mut state, &Event::Navigate(Route::New)).unwrap();
        if let FormLoad::Ready(form) = &mut state.form {
            form.title = "Keep me".to_string();
            form.price = "5".to_string();
        }
        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        let seq = issued_request(&actions).seq();

        handle_event(
            &mut state,
            &Event::WorkerResponse(OpsResponse::Failed {
                seq,
                message: "price must be >= 0".to_string(),
            }),
        )
        .unwrap();
        assert_eq!(state.error.as_deref(), Some("price must be >= 0"));
        let FormLoad::Ready(form) = &state.form else {
            panic!("form must survive a failed save");
        };
        assert_eq!(form.title, "Keep me");
        assert_eq!(state.route, Route::New);
    }

    #[test]
    fn delete_requires_confirmation_then_refetches() {
        let mut state = new_state();
        with_listed_events(&mut state, vec![record(4, "Doomed event")]);

        let (_, actions) = handle_event(&mut state, &Event::DeleteEvent).unwrap();
        assert!(actions.is_empty());
        assert_eq!(state.input_mode, InputMode::ConfirmDelete { id: 4 });

        let (_, actions) = handle_event(&mut state, &Event::ConfirmDelete).unwrap();
        let request = issued_request(&actions).clone();
        assert!(matches!(request, OpsRequest::DeleteEvent { id: 4, .. }));
        assert_eq!(state.input_mode, InputMode::Normal);

        let (_, actions) = handle_event(
            &mut state,
            &Event::WorkerResponse(OpsResponse::EventDeleted {
                seq: request.seq(),
                id: 4,
            }),
        )
        .unwrap();
        assert!(matches!(
            issued_request(&actions),
            OpsRequest::ListEvents { .. }
        ));
    }

    #[test]
    fn cancelling_a_delete_changes_nothing() {
        let mut state = new_state();
        with_listed_events(&mut state, vec![record(4, "Safe event")]);
        handle_event(&mut state, &Event::DeleteEvent).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::CancelDelete).unwrap();
        assert!(actions.is_empty());
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.events.len(), 1);
    }

    #[test]
    fn missing_detail_renders_not_found_without_an_error() {
        let mut state = new_state();
        let actions = enter_route(&mut state, Route::Detail(9));
        let seq = issued_request(&actions).seq();

        handle_event(
            &mut state,
            &Event::WorkerResponse(OpsResponse::EventMissing { seq, id: 9 }),
        )
        .unwrap();
        assert_eq!(state.detail, DetailState::Missing);
        assert!(state.error.is_none());
    }

    #[test]
    fn failed_first_detail_fetch_is_distinct_from_missing() {
        let mut state = new_state();
        let actions = enter_route(&mut state, Route::Detail(9));
        let seq = issued_request(&actions).seq();

        handle_event(
            &mut state,
            &Event::WorkerResponse(OpsResponse::Failed {
                seq,
                message: "An error occurred".to_string(),
            }),
        )
        .unwrap();
        assert_eq!(state.detail, DetailState::Unavailable);
        assert_eq!(state.error.as_deref(), Some("An error occurred"));
    }

    #[test]
    fn failed_refresh_keeps_the_loaded_detail() {
        let mut state = new_state();
        let actions = enter_route(&mut state, Route::Detail(2));
        let seq = issued_request(&actions).seq();
        handle_event(
            &mut state,
            &Event::WorkerResponse(OpsResponse::EventFetched {
                seq,
                event: record(2, "Still here"),
            }),
        )
        .unwrap();

        let (_, actions) = handle_event(&mut state, &Event::Refresh).unwrap();
        let seq = issued_request(&actions).seq();
        handle_event(
            &mut state,
            &Event::WorkerResponse(OpsResponse::Failed {
                seq,
                message: "An error occurred".to_string(),
            }),
        )
        .unwrap();
        assert!(matches!(state.detail, DetailState::Loaded(_)));
        assert!(state.error.is_some());
    }

    #[test]
    fn characters_go_to_the_search_query_on_the_list() {
        let mut state = new_state();
        with_listed_events(
            &mut state,
            vec![record(1, "Rust meetup"), record(2, "Game night")],
        );
        handle_event(&mut state, &Event::SearchMode).unwrap();
        for c in "rust".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        assert_eq!(state.search_query, "rust");
        assert_eq!(state.filtered_events.len(), 1);

        handle_event(&mut state, &Event::ExitSearch).unwrap();
        assert_eq!(state.search_query, "");
        assert_eq!(state.filtered_events.len(), 2);
    }

    #[test]
    fn editing_a_missing_event_renders_the_form_missing_state() {
        let mut state = new_state();
        let actions = enter_route(&mut state, Route::Edit(77));
        let seq = issued_request(&actions).seq();
        handle_event(
            &mut state,
            &Event::WorkerResponse(OpsResponse::EventMissing { seq, id: 77 }),
        )
        .unwrap();
        assert_eq!(state.form, FormLoad::Missing);
    }
}
