//! Domain layer for eventdeck.
//!
//! This module contains the core domain types and display rules for the
//! client, independent of HTTP, terminal, or configuration concerns. It
//! follows domain-driven design principles by keeping the event model and
//! its formatting isolated from external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`event`]: Event domain model, status enumeration, and display formatting
//!
//! # Examples
//!
//! ```
//! use eventdeck::domain::{EventDraft, EventStatus};
//! use chrono::{TimeZone, Utc};
//!
//! let draft = EventDraft {
//!     title: "Launch party".to_string(),
//!     start_date: Utc.with_ymd_and_hms(2024, 1, 5, 18, 0, 0).unwrap(),
//!     end_date: Utc.with_ymd_and_hms(2024, 1, 5, 22, 0, 0).unwrap(),
//!     price: 25.0,
//!     status: EventStatus::Started,
//! };
//! assert_eq!(draft.status, EventStatus::default());
//! ```

pub mod error;
pub mod event;

pub use error::{EventdeckError, Result};
pub use event::{Emphasis, EventDraft, EventRecord, EventStatus};
