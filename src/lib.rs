//! Eventdeck: a terminal client for browsing and managing events against a
//! REST API.
//!
//! Eventdeck renders a keyboard-driven terminal UI over an HTTP "events"
//! resource:
//! - A table of all events with fuzzy title search and windowed scrolling
//! - A detail screen with derived duration and distinct not-found handling
//! - A shared create/edit form that keeps unsaved input across failures
//! - Interactive delete confirmation with a full re-fetch on success
//! - Diagnostic logging to a rotating file (stdout belongs to the UI)
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shell (main.rs)                           │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ API Layer     │   │ Worker Layer  │
//! │ (ui/)         │   │ (api/)        │   │ (worker/)     │
//! │ - Rendering   │   │ - Gateway     │   │ - HTTP thread │
//! │ - Theming     │   │ - reqwest     │   │ - Sequencing  │
//! │ - Components  │   │ - Taxonomy    │   │ - Channels    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Event model (domain/event)                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing → rotating log file                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Control Flow
//!
//! A screen mounts → the handler issues a tagged request → the worker calls
//! the API on its own thread → the response updates state → the screen
//! re-renders. Responses whose tag is no longer the latest are discarded,
//! so a stale answer can never overwrite newer state.
//!
//! # Configuration
//!
//! All settings come from the environment (CLI flags override them):
//!
//! | Variable                | Meaning                                |
//! |-------------------------|----------------------------------------|
//! | `EVENTDECK_API_URL`     | Base endpoint, default `http://localhost:8080/api` |
//! | `EVENTDECK_THEME`       | Built-in theme name                    |
//! | `EVENTDECK_THEME_FILE`  | Custom TOML theme path                 |
//! | `EVENTDECK_LOG`         | Log filter (overridden by `RUST_LOG`)  |

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{enter_route, handle_event, Action, AppState, Event, InputMode, Route, SearchFocus};
pub use domain::{EventDraft, EventRecord, EventStatus, EventdeckError, Result};
pub use ui::Theme;

/// Default API base endpoint when nothing is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Client configuration resolved from the environment.
///
/// The API base URL is the only setting the client requires; theme and log
/// options are ambient. CLI flags in the binary override these values.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the events API, e.g. `http://localhost:8080/api`.
    ///
    /// The `events` collection path is appended by the client.
    pub api_url: String,

    /// Built-in theme name to use.
    ///
    /// Options: `deck-dark`, `deck-light`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Log filter directive, e.g. `debug` or `eventdeck=trace`.
    ///
    /// `RUST_LOG` takes precedence when set. Default: `"info"`.
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            theme_name: None,
            theme_file: None,
            log_level: None,
        }
    }
}

impl Config {
    /// Resolves configuration from `EVENTDECK_*` environment variables,
    /// falling back to defaults. Empty values are treated as unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_url: env_value("EVENTDECK_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            theme_name: env_value("EVENTDECK_THEME"),
            theme_file: env_value("EVENTDECK_THEME_FILE"),
            log_level: env_value("EVENTDECK_LOG"),
        }
    }
}

/// Reads an environment variable, filtering empty values.
fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Initializes the application state with configuration.
///
/// Resolves the theme (custom file first, then built-in name, then the
/// default) and creates a fresh [`AppState`] on the list route. A theme
/// that fails to load falls back to the default with a log line rather
/// than failing startup.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing eventdeck");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_localhost() {
        let config = Config::default();
        assert_eq!(config.api_url, "http://localhost:8080/api");
        assert!(config.theme_name.is_none());
    }

    #[test]
    fn unknown_theme_name_falls_back_to_default() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "deck-dark");
    }

    #[test]
    fn named_theme_is_honored() {
        let config = Config {
            theme_name: Some("deck-light".to_string()),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "deck-light");
    }
}
