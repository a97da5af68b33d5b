//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application
//! state, following the MVVM pattern. View models are optimized for
//! rendering and contain pre-computed display information like formatted
//! columns, highlight ranges, and per-screen fetch outcomes. They contain
//! no business logic.

use crate::domain::Emphasis;

/// Complete UI view model for rendering one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// The routed screen's content.
    pub screen: ScreenView,

    /// Header information (title, loading marker).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// Optional notice line (error message or delete confirmation prompt).
    pub notice: Option<NoticeInfo>,

    /// Optional search bar information (when search mode is active).
    pub search_bar: Option<SearchBarInfo>,
}

/// Content of the currently routed screen.
#[derive(Debug, Clone)]
pub enum ScreenView {
    /// The event table.
    Table(TableView),
    /// A single event.
    Detail(DetailView),
    /// The create/edit form.
    Form(FormView),
}

/// Renderable state of the event table.
#[derive(Debug, Clone)]
pub struct TableView {
    /// Visible window of rows, already formatted.
    pub rows: Vec<DisplayRow>,

    /// Index of the selected row within the visible window.
    pub selected_index: usize,

    /// Empty state message when there is nothing to list.
    pub empty_state: Option<EmptyState>,
}

/// Display information for a single table row.
#[derive(Debug, Clone)]
pub struct DisplayRow {
    /// Event title, truncated to the column width.
    pub title: String,

    /// Formatted start timestamp.
    pub start: String,

    /// Formatted end timestamp.
    pub end: String,

    /// Formatted price.
    pub price: String,

    /// Status label.
    pub status: String,

    /// Visual emphasis for the status cell.
    pub emphasis: Emphasis,

    /// Whether this row is currently selected.
    pub is_selected: bool,

    /// Character ranges of the title to highlight (fuzzy search matches).
    ///
    /// Each tuple is `(start_index, end_index)` in character indices with
    /// an exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Renderable state of the detail screen.
#[derive(Debug, Clone)]
pub enum DetailView {
    /// The fetch is in flight.
    Loading,
    /// The server reported the event absent.
    Missing,
    /// The fetch failed before anything was loaded.
    Unavailable,
    /// The record arrived in full.
    Loaded(DetailCard),
}

/// Pre-formatted fields of a loaded detail screen.
#[derive(Debug, Clone)]
pub struct DetailCard {
    pub title: String,
    pub status: String,
    pub emphasis: Emphasis,
    pub start: String,
    pub end: String,
    pub duration: String,
    pub price: String,
    pub id_tag: String,
}

/// Renderable state of the form screen.
#[derive(Debug, Clone)]
pub enum FormView {
    /// The record to pre-fill is being fetched.
    Loading,
    /// The record to edit does not exist.
    Missing,
    /// The pre-fill fetch failed.
    Unavailable,
    /// The form is editable.
    Ready(FormCard),
}

/// The editable form's field rows.
#[derive(Debug, Clone)]
pub struct FormCard {
    pub fields: Vec<FormFieldView>,
}

/// One field row of the form.
#[derive(Debug, Clone)]
pub struct FormFieldView {
    /// Row label.
    pub label: &'static str,

    /// Current buffer contents (or the status label).
    pub value: String,

    /// Emphasis color for the value (status field only).
    pub emphasis: Option<Emphasis>,

    /// Whether this field has input focus.
    pub is_focused: bool,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current screen and mode.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g. "No events found.").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}

/// Notice line display information.
#[derive(Debug, Clone)]
pub struct NoticeInfo {
    /// Notice text.
    pub text: String,

    /// How to color the notice.
    pub kind: NoticeKind,
}

/// Category of the notice line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// A failed operation's message.
    Error,
    /// The delete confirmation prompt.
    Confirm,
}
