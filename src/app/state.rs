//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! client, along with methods for filtering, selection management, request
//! sequencing, and UI view model generation. It is the single source of
//! truth for all transient UI state.
//!
//! # Architecture
//!
//! `AppState` separates core data (the fetched events) from derived state
//! (filtered events, selection) to keep transitions simple. View models are
//! computed on demand from state snapshots; rendering never mutates state.
//!
//! # State Components
//!
//! - **Route**: Which screen is showing (list, detail, create, edit)
//! - **Events**: The collection as last fetched from the API
//! - **Filtered Events**: Subset after applying the search query
//! - **Selection**: Cursor position within filtered results
//! - **Detail / Form**: Per-screen fetch state, never partially populated
//! - **Loading / Error**: The in-flight flag and single current message,
//!   reset when a new operation is issued and overwritten by its outcome
//!
//! # Request Sequencing
//!
//! Every request issued through [`AppState::begin_request`] gets a
//! monotonically increasing tag; [`AppState::accepts_response`] rejects any
//! response whose tag is not the latest, so an answer that arrives after the
//! user navigated away can never overwrite newer state.

use fuzzy_matcher::skim::SkimMatcherV2;

use super::form::FormState;
use super::modes::{InputMode, Route, SearchFocus};
use crate::domain::event::{format_long, format_short};
use crate::domain::EventRecord;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DetailCard, DetailView, DisplayRow, EmptyState, FormCard, FormFieldView, FormView,
    HeaderInfo, FooterInfo, NoticeInfo, NoticeKind, ScreenView, SearchBarInfo, TableView,
    UIViewModel,
};

/// Fetch state of the detail screen.
///
/// An event held by a screen is either absent, loading, or fully populated;
/// there is no partial-record state. "Missing" (the server said 404) renders
/// differently from "Unavailable" (the fetch failed with nothing loaded).
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    /// No detail screen is active.
    Absent,
    /// The fetch is in flight.
    Loading,
    /// The record arrived in full.
    Loaded(EventRecord),
    /// The server reported the id absent.
    Missing,
    /// The fetch failed before anything was loaded.
    Unavailable,
}

/// Fetch state of the form screen.
///
/// The create form is `Ready` immediately; the edit form passes through
/// `Loading` while the record to pre-fill is fetched.
#[derive(Debug, Clone, PartialEq)]
pub enum FormLoad {
    /// No form screen is active.
    Inactive,
    /// The record to edit is being fetched.
    Loading,
    /// The form is editable.
    Ready(FormState),
    /// The record to edit does not exist.
    Missing,
    /// The pre-fill fetch failed.
    Unavailable,
}

/// Central application state container.
///
/// Holds all transient UI state. Mutated by the event handler in response to
/// user input and worker responses; view models are computed on demand.
#[derive(Debug)]
pub struct AppState {
    /// The routed screen currently showing.
    pub route: Route,

    /// Event collection as last fetched from the API.
    ///
    /// The client keeps no cache: the list is re-fetched on every entry to
    /// the list screen and after every successful delete or save.
    pub events: Vec<EventRecord>,

    /// Events matching the current search query.
    ///
    /// Recomputed by `apply_search_filter()` after state changes. Used for
    /// rendering and selection bounds checking.
    pub filtered_events: Vec<EventRecord>,

    /// Zero-based index of the selected event within `filtered_events`.
    pub selected_index: usize,

    /// Current input handling mode on the list screen.
    pub input_mode: InputMode,

    /// Current search query string.
    pub search_query: String,

    /// Fetch state of the detail screen.
    pub detail: DetailState,

    /// Fetch state of the form screen.
    pub form: FormLoad,

    /// Whether an operation is in flight.
    pub loading: bool,

    /// The single current error message, if any.
    ///
    /// Overwritten by each new operation. Shown as a non-blocking notice;
    /// the prior successful render (or unsaved form input) stays on screen.
    pub error: Option<String>,

    /// Last issued request tag.
    next_seq: u64,

    /// Tag of the request currently in flight, if any.
    current_seq: Option<u64>,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a fresh state on the list route with no data yet.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            route: Route::List,
            events: vec![],
            filtered_events: vec![],
            selected_index: 0,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            detail: DetailState::Absent,
            form: FormLoad::Inactive,
            loading: false,
            error: None,
            next_seq: 0,
            current_seq: None,
            theme,
        }
    }

    /// Issues a new request tag, raising the in-flight flag and clearing the
    /// previous error message.
    pub fn begin_request(&mut self) -> u64 {
        self.next_seq += 1;
        self.current_seq = Some(self.next_seq);
        self.loading = true;
        self.error = None;
        self.next_seq
    }

    /// Whether a response tag matches the latest issued request.
    ///
    /// Stale tags are discarded by the handler without touching state.
    #[must_use]
    pub fn accepts_response(&self, seq: u64) -> bool {
        self.current_seq == Some(seq)
    }

    /// Lowers the in-flight flag after the matching response arrived.
    pub fn complete_request(&mut self) {
        self.loading = false;
        self.current_seq = None;
    }

    /// Moves the selection down by one position, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.filtered_events.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered_events.len();
    }

    /// Moves the selection up by one position, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.filtered_events.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered_events.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the currently selected event, if any.
    #[must_use]
    pub fn selected_event(&self) -> Option<&EventRecord> {
        self.filtered_events.get(self.selected_index)
    }

    /// Looks an event up by id in the fetched collection.
    #[must_use]
    pub fn event_by_id(&self, id: i64) -> Option<&EventRecord> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Applies the search query to the fetched collection.
    ///
    /// The query is split into whitespace tokens; an event stays visible
    /// when every token fuzzy-matches its lower-cased title. Updates
    /// `filtered_events` and clamps `selected_index` to valid bounds.
    pub fn apply_search_filter(&mut self) {
        use fuzzy_matcher::FuzzyMatcher;

        let _span = tracing::debug_span!(
            "apply_search_filter",
            total_events = self.events.len(),
            query_len = self.search_query.len()
        )
        .entered();

        let tokens: Vec<String> = if self.search_query.is_empty() {
            vec![]
        } else {
            self.search_query
                .split_whitespace()
                .map(str::to_lowercase)
                .collect()
        };

        let matcher = if tokens.is_empty() {
            None
        } else {
            Some(SkimMatcherV2::default())
        };

        self.filtered_events = self
            .events
            .iter()
            .filter(|event| {
                matcher.as_ref().map_or(true, |m| {
                    let title_lower = event.title.to_lowercase();
                    tokens
                        .iter()
                        .all(|token| m.fuzzy_match(&title_lower, token).is_some())
                })
            })
            .cloned()
            .collect();

        if self.filtered_events.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered_events.len() - 1);
        }

        tracing::debug!(
            filtered_count = self.filtered_events.len(),
            "search filter applied"
        );
    }

    /// Computes a renderable view model from current state and terminal
    /// dimensions.
    ///
    /// Handles windowing (showing a subset of rows centered on the
    /// selection), fuzzy match highlighting, per-screen fetch states, and
    /// the notice line.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let screen = match self.route {
            Route::List => ScreenView::Table(self.compute_table(rows, cols)),
            Route::Detail(_) => ScreenView::Detail(self.compute_detail()),
            Route::New | Route::Edit(_) => ScreenView::Form(self.compute_form()),
        };

        UIViewModel {
            screen,
            header: self.compute_header(),
            footer: self.compute_footer(),
            notice: self.compute_notice(),
            search_bar: self.compute_search_bar(),
        }
    }

    /// Builds the table screen: windowed rows or an empty state.
    fn compute_table(&self, rows: usize, cols: usize) -> TableView {
        if let Some(empty) = self.compute_empty_state() {
            return TableView {
                rows: vec![],
                selected_index: 0,
                empty_state: Some(empty),
            };
        }

        let available_rows = self.calculate_available_rows(rows).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.filtered_events.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && self.filtered_events.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let matcher = if matches!(self.input_mode, InputMode::Search(_))
            && !self.search_query.is_empty()
        {
            Some(SkimMatcherV2::default())
        } else {
            None
        };

        let display_rows: Vec<DisplayRow> = self.filtered_events[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, event)| {
                let absolute_idx = visible_start + relative_idx;
                self.compute_display_row(event, absolute_idx, cols, matcher.as_ref())
            })
            .collect();

        TableView {
            rows: display_rows,
            selected_index: self.selected_index.saturating_sub(visible_start),
            empty_state: None,
        }
    }

    /// Builds one table row with formatted columns and highlight ranges.
    fn compute_display_row(
        &self,
        event: &EventRecord,
        absolute_idx: usize,
        cols: usize,
        matcher: Option<&SkimMatcherV2>,
    ) -> DisplayRow {
        // The columns after TITLE consume 53 cells plus the status label;
        // shrink the title budget on narrow terminals instead of wrapping.
        let max_title_width = cols.saturating_sub(53).clamp(10, 30);
        let title = crate::ui::helpers::truncate_label(&event.title, max_title_width);
        let highlight_ranges = matcher
            .map_or_else(Vec::new, |m| self.compute_highlight_ranges(&event.title, m));

        DisplayRow {
            title,
            start: format_short(&event.start_date),
            end: format_short(&event.end_date),
            price: event.price_display(),
            status: event.status.label().to_string(),
            emphasis: event.status.emphasis(),
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges,
        }
    }

    /// Computes character index ranges to highlight for fuzzy matches.
    ///
    /// Consecutive matched indices are coalesced into `(start, end)` ranges
    /// (exclusive end) for efficient highlighting.
    fn compute_highlight_ranges(
        &self,
        text: &str,
        matcher: &SkimMatcherV2,
    ) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;

        if let Some((_score, indices)) = matcher.fuzzy_indices(text, &self.search_query) {
            let mut ranges = Vec::new();
            let mut start = None;
            let mut prev = None;

            for &idx in &indices {
                match (start, prev) {
                    (None, _) => {
                        start = Some(idx);
                        prev = Some(idx);
                    }
                    (Some(_), Some(p)) if idx == p + 1 => {
                        prev = Some(idx);
                    }
                    (Some(s), Some(p)) => {
                        ranges.push((s, p + 1));
                        start = Some(idx);
                        prev = Some(idx);
                    }
                    _ => {}
                }
            }

            if let (Some(s), Some(p)) = (start, prev) {
                ranges.push((s, p + 1));
            }

            ranges
        } else {
            vec![]
        }
    }

    /// Builds the detail screen from its fetch state.
    fn compute_detail(&self) -> DetailView {
        match &self.detail {
            DetailState::Absent | DetailState::Loading => DetailView::Loading,
            DetailState::Missing => DetailView::Missing,
            DetailState::Unavailable => DetailView::Unavailable,
            DetailState::Loaded(event) => DetailView::Loaded(DetailCard {
                title: event.title.clone(),
                status: event.status.label().to_string(),
                emphasis: event.status.emphasis(),
                start: format_long(&event.start_date),
                end: format_long(&event.end_date),
                duration: format_duration_hours(event.duration_hours()),
                price: event.price_display(),
                id_tag: format!("#{}", event.id),
            }),
        }
    }

    /// Builds the form screen from its fetch state.
    fn compute_form(&self) -> FormView {
        match &self.form {
            FormLoad::Inactive | FormLoad::Loading => FormView::Loading,
            FormLoad::Missing => FormView::Missing,
            FormLoad::Unavailable => FormView::Unavailable,
            FormLoad::Ready(form) => {
                use super::form::FormField;
                let fields = [
                    FormField::Title,
                    FormField::Start,
                    FormField::End,
                    FormField::Price,
                    FormField::Status,
                ]
                .into_iter()
                .map(|field| FormFieldView {
                    label: field.label(),
                    value: form.value(field),
                    emphasis: (field == FormField::Status)
                        .then(|| form.status.emphasis()),
                    is_focused: form.focus == field,
                })
                .collect();

                FormView::Ready(FormCard { fields })
            }
        }
    }

    /// Builds the empty state for the table, if one applies.
    fn compute_empty_state(&self) -> Option<EmptyState> {
        if self.events.is_empty() {
            if self.loading {
                return Some(EmptyState {
                    message: "Loading events…".to_string(),
                    subtitle: "Fetching from the API".to_string(),
                });
            }
            return Some(EmptyState {
                message: "No events found.".to_string(),
                subtitle: "Press 'n' to create your first event".to_string(),
            });
        }
        if self.filtered_events.is_empty() {
            return Some(EmptyState {
                message: "No matching events".to_string(),
                subtitle: "Press ESC to clear the search".to_string(),
            });
        }
        None
    }

    /// Computes the header title for the current screen.
    fn compute_header(&self) -> HeaderInfo {
        let base = match self.route {
            Route::List => format!("Events ({})", self.filtered_events.len()),
            Route::Detail(_) => "Event Details".to_string(),
            Route::New => "Create New Event".to_string(),
            Route::Edit(_) => "Edit Event".to_string(),
        };
        let suffix = if self.loading { " · loading…" } else { "" };
        HeaderInfo {
            title: format!(" {base}{suffix} "),
        }
    }

    /// Computes footer keybinding hints for the current screen and mode.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.route, self.input_mode) {
            (Route::List, InputMode::Search(SearchFocus::Typing)) => {
                "ESC: exit search  Enter: view  Ctrl+n/p: navigate  Type to filter".to_string()
            }
            (Route::List, InputMode::Search(SearchFocus::Navigating)) => {
                "ESC: exit search  /: edit query  j/k or Ctrl+n/p: navigate  Enter: view"
                    .to_string()
            }
            (Route::List, InputMode::ConfirmDelete { .. }) => {
                "y: delete  n/ESC: cancel".to_string()
            }
            (Route::List, InputMode::Normal) => {
                "j/k: navigate  Enter: view  n: new  e: edit  d: delete  /: search  r: refresh  q: quit"
                    .to_string()
            }
            (Route::Detail(_), _) => "e: edit  r: refresh  ESC: back  q: quit".to_string(),
            (Route::New | Route::Edit(_), _) => {
                "Tab/↓: next field  Shift+Tab/↑: previous  Space: cycle status  Enter: save  ESC: cancel"
                    .to_string()
            }
        };
        FooterInfo { keybindings }
    }

    /// Computes the notice line: a pending delete prompt or the current
    /// error message.
    fn compute_notice(&self) -> Option<NoticeInfo> {
        if let InputMode::ConfirmDelete { id } = self.input_mode {
            let title = self
                .event_by_id(id)
                .map_or_else(|| "this event".to_string(), |e| format!("\"{}\"", e.title));
            return Some(NoticeInfo {
                text: format!("Delete {title}? (y/n)"),
                kind: NoticeKind::Confirm,
            });
        }
        self.error.as_ref().map(|message| NoticeInfo {
            text: message.clone(),
            kind: NoticeKind::Error,
        })
    }

    /// Computes search bar state if search mode is active.
    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if self.route == Route::List && matches!(self.input_mode, InputMode::Search(_)) {
            Some(SearchBarInfo {
                query: self.search_query.clone(),
            })
        } else {
            None
        }
    }

    /// Rows available for the table after subtracting UI chrome.
    ///
    /// Accounts for the blank top line, header, two borders, the column
    /// header row, the notice line, the footer, and the search box (3 rows)
    /// when active.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Search(_) => total_rows.saturating_sub(10),
            InputMode::Normal | InputMode::ConfirmDelete { .. } => total_rows.saturating_sub(7),
        }
    }
}

/// Formats a whole-hour duration for display.
fn format_duration_hours(hours: i64) -> String {
    if hours == 1 {
        "1 hour".to_string()
    } else {
        format!("{hours} hours")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EventStatus;
    use chrono::{TimeZone, Utc};

    fn event(id: i64, title: &str) -> EventRecord {
        EventRecord {
            id,
            title: title.to_string(),
            start_date: Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 1, 1, 13, 30, 0).unwrap(),
            price: 20.0,
            status: EventStatus::Started,
        }
    }

    fn state_with(events: Vec<EventRecord>) -> AppState {
        let mut state = AppState::new(Theme::default());
        state.events = events;
        state.apply_search_filter();
        state
    }

    #[test]
    fn zero_events_render_empty_state_and_no_rows() {
        let state = state_with(vec![]);
        let vm = state.compute_viewmodel(24, 80);
        let ScreenView::Table(table) = vm.screen else {
            panic!("expected table screen");
        };
        assert!(table.rows.is_empty());
        let empty = table.empty_state.expect("empty state expected");
        assert_eq!(empty.message, "No events found.");
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = state_with(vec![event(1, "a"), event(2, "b"), event(3, "c")]);
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn search_filters_by_fuzzy_title_tokens() {
        let mut state = state_with(vec![
            event(1, "Rust meetup"),
            event(2, "Board games night"),
            event(3, "Rust workshop"),
        ]);
        state.search_query = "rust".to_string();
        state.apply_search_filter();
        assert_eq!(state.filtered_events.len(), 2);

        state.search_query = "rust work".to_string();
        state.apply_search_filter();
        assert_eq!(state.filtered_events.len(), 1);
        assert_eq!(state.filtered_events[0].id, 3);
    }

    #[test]
    fn filter_clamps_selection() {
        let mut state = state_with(vec![event(1, "alpha"), event(2, "beta")]);
        state.selected_index = 1;
        state.search_query = "alpha".to_string();
        state.apply_search_filter();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn stale_sequence_tags_are_rejected() {
        let mut state = state_with(vec![]);
        let first = state.begin_request();
        let second = state.begin_request();
        assert!(!state.accepts_response(first));
        assert!(state.accepts_response(second));
        state.complete_request();
        assert!(!state.accepts_response(second));
        assert!(!state.loading);
    }

    #[test]
    fn begin_request_clears_prior_error() {
        let mut state = state_with(vec![]);
        state.error = Some("old failure".to_string());
        state.begin_request();
        assert!(state.error.is_none());
        assert!(state.loading);
    }

    #[test]
    fn detail_card_truncates_duration_to_whole_hours() {
        let mut state = state_with(vec![]);
        state.route = Route::Detail(1);
        state.detail = DetailState::Loaded(event(1, "Workshop"));
        let vm = state.compute_viewmodel(24, 80);
        let ScreenView::Detail(DetailView::Loaded(card)) = vm.screen else {
            panic!("expected loaded detail");
        };
        // 10:00 → 13:30 is 3 whole hours, not 3.5.
        assert_eq!(card.duration, "3 hours");
        assert_eq!(card.id_tag, "#1");
    }

    #[test]
    fn confirm_mode_produces_the_prompt_notice() {
        let mut state = state_with(vec![event(4, "Quiz night")]);
        state.input_mode = InputMode::ConfirmDelete { id: 4 };
        let vm = state.compute_viewmodel(24, 80);
        let notice = vm.notice.expect("notice expected");
        assert_eq!(notice.kind, NoticeKind::Confirm);
        assert!(notice.text.contains("Quiz night"));
    }

    #[test]
    fn error_message_produces_an_error_notice() {
        let mut state = state_with(vec![event(1, "a")]);
        state.error = Some("An error occurred".to_string());
        let vm = state.compute_viewmodel(24, 80);
        let notice = vm.notice.expect("notice expected");
        assert_eq!(notice.kind, NoticeKind::Error);
    }

    #[test]
    fn table_windowing_keeps_selection_visible() {
        let events: Vec<EventRecord> =
            (1..=50).map(|i| event(i, &format!("event {i}"))).collect();
        let mut state = state_with(events);
        state.selected_index = 49;
        let vm = state.compute_viewmodel(24, 80);
        let ScreenView::Table(table) = vm.screen else {
            panic!("expected table screen");
        };
        assert!(table.rows.len() <= 17);
        assert!(table.rows[table.selected_index].is_selected);
        assert_eq!(table.rows[table.selected_index].title, "event 50");
    }

    #[test]
    fn status_column_carries_emphasis() {
        let mut completed = event(1, "done");
        completed.status = EventStatus::Completed;
        let state = state_with(vec![completed]);
        let vm = state.compute_viewmodel(24, 80);
        let ScreenView::Table(table) = vm.screen else {
            panic!("expected table screen");
        };
        assert_eq!(table.rows[0].emphasis, crate::domain::Emphasis::Success);
        assert_eq!(table.rows[0].status, "COMPLETED");
    }
}
