//! Gateway abstraction over the events API.
//!
//! This module defines the [`EventsGateway`] trait that abstracts the remote
//! API behind the five operations the application needs. The operations
//! worker holds the gateway boxed, which keeps the HTTP client out of the
//! state machine and lets tests substitute a stub.
//!
//! # Design Philosophy
//!
//! The trait is minimal and use-case shaped, not a generic REST wrapper.
//! Each method maps directly to one screen interaction.

use crate::api::error::ApiError;
use crate::domain::{EventDraft, EventRecord};

/// Abstraction over the remote events API.
///
/// Implementations must be [`Send`] so the worker thread can own one.
///
/// # Implementations
///
/// - [`HttpEventsClient`](crate::api::HttpEventsClient): reqwest-backed (default)
pub trait EventsGateway: Send {
    /// Fetches the full event collection.
    ///
    /// # Errors
    ///
    /// `Transport` on network failure, `Server`/`Validation` on non-2xx,
    /// `Decode` on an unreadable body.
    fn list_events(&self) -> Result<Vec<EventRecord>, ApiError>;

    /// Fetches a single event by identifier.
    ///
    /// # Errors
    ///
    /// `NotFound` if the server reports the id absent, otherwise as
    /// [`list_events`](Self::list_events).
    fn get_event(&self, id: i64) -> Result<EventRecord, ApiError>;

    /// Creates an event from a draft; the server assigns the identifier and
    /// returns the created record.
    ///
    /// # Errors
    ///
    /// `Validation` with field-level messages on a 4xx response, otherwise
    /// as [`list_events`](Self::list_events).
    fn create_event(&self, draft: &EventDraft) -> Result<EventRecord, ApiError>;

    /// Replaces every field of an existing event and returns the updated
    /// record. No field merging takes place.
    ///
    /// # Errors
    ///
    /// As [`create_event`](Self::create_event), plus `NotFound`.
    fn update_event(&self, id: i64, draft: &EventDraft) -> Result<EventRecord, ApiError>;

    /// Deletes an event by identifier.
    ///
    /// The server's answer is surfaced as-is; callers treat a repeat delete
    /// of an already-deleted id as recoverable.
    ///
    /// # Errors
    ///
    /// As [`get_event`](Self::get_event).
    fn delete_event(&self, id: i64) -> Result<(), ApiError>;
}
