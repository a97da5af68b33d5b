//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! terminal shell (main.rs) and the domain/api/worker layers. It implements
//! the event-driven architecture that powers the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`form`]: Create/edit form buffers and draft assembly
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Route and input-mode state machine types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod form;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use form::{FormField, FormMode, FormState};
pub use handler::{enter_route, handle_event, Event};
pub use modes::{InputMode, Route, SearchFocus};
pub use state::{AppState, DetailState, FormLoad};
