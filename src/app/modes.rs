//! Route and input-mode state types for the application.
//!
//! This module defines the state machine enums that control which screen is
//! rendered and how keyboard input is interpreted. Navigation is URL-path
//! driven: every screen corresponds to a route path, and the binary accepts
//! a starting route on the command line.
//!
//! # State Machine
//!
//! The application renders one of four routed screens:
//! - **List** (`/`): the event table
//! - **New** (`/events/new`): the create form
//! - **Detail** (`/events/:id`): a single event
//! - **Edit** (`/events/:id/edit`): the edit form
//!
//! Input modes apply within the list screen:
//! - **Normal**: navigation and command keys
//! - **Search**: query typing or result navigation
//! - **`ConfirmDelete`**: a pending delete awaiting y/n

/// Routed screen selector.
///
/// Mirrors the path scheme of the events API's front door, so a route can be
/// parsed from and formatted back to a path string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The event table at `/`.
    List,
    /// The create form at `/events/new`.
    New,
    /// A single event at `/events/:id`.
    Detail(i64),
    /// The edit form at `/events/:id/edit`.
    Edit(i64),
}

impl Route {
    /// Parses a route from a path string.
    ///
    /// The literal segment `new` selects the create form; any other second
    /// segment must be a numeric identifier. Unknown paths yield `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use eventdeck::app::Route;
    ///
    /// assert_eq!(Route::parse("/"), Some(Route::List));
    /// assert_eq!(Route::parse("/events/new"), Some(Route::New));
    /// assert_eq!(Route::parse("/events/42"), Some(Route::Detail(42)));
    /// assert_eq!(Route::parse("/events/42/edit"), Some(Route::Edit(42)));
    /// assert_eq!(Route::parse("/events/abc"), None);
    /// ```
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(Self::List),
            ["events", "new"] => Some(Self::New),
            ["events", id] => id.parse().ok().map(Self::Detail),
            ["events", id, "edit"] => id.parse().ok().map(Self::Edit),
            _ => None,
        }
    }

    /// Formats the route back to its path string.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::List => "/".to_string(),
            Self::New => "/events/new".to_string(),
            Self::Detail(id) => format!("/events/{id}"),
            Self::Edit(id) => format!("/events/{id}/edit"),
        }
    }

    /// Returns `true` for the two form routes.
    #[must_use]
    pub const fn is_form(&self) -> bool {
        matches!(self, Self::New | Self::Edit(_))
    }
}

/// Focus state within search mode.
///
/// Determines whether search input is being typed or filtered results are
/// being navigated. Controls which keybindings are active during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    Typing,

    /// User is navigating through filtered results.
    Navigating,
}

/// Current input handling mode on the list screen.
///
/// Controls which keybindings are active and what the footer shows. The
/// detail and form screens interpret keys by route instead, so this mode
/// only varies while the table is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    Normal,

    /// Active search mode with focus state.
    Search(SearchFocus),

    /// A delete of the identified event is awaiting confirmation.
    ///
    /// Only `y` (confirm) and `n`/Esc (cancel) are accepted.
    ConfirmDelete {
        /// Identifier of the event to delete on confirmation.
        id: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_known_routes() {
        assert_eq!(Route::parse("/"), Some(Route::List));
        assert_eq!(Route::parse(""), Some(Route::List));
        assert_eq!(Route::parse("/events/new"), Some(Route::New));
        assert_eq!(Route::parse("/events/7"), Some(Route::Detail(7)));
        assert_eq!(Route::parse("/events/7/edit"), Some(Route::Edit(7)));
        // Tolerates a trailing slash.
        assert_eq!(Route::parse("/events/new/"), Some(Route::New));
    }

    #[test]
    fn rejects_unknown_paths() {
        assert_eq!(Route::parse("/events/abc"), None);
        assert_eq!(Route::parse("/venues/1"), None);
        assert_eq!(Route::parse("/events/7/delete"), None);
    }

    #[test]
    fn path_round_trips() {
        for route in [Route::List, Route::New, Route::Detail(3), Route::Edit(3)] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }
}
