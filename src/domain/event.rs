//! Event domain model, status enumeration, and display formatting.
//!
//! This module defines the wire shape of an event as served by the API
//! (camelCase JSON with ISO-8601 timestamps) together with the display
//! transformations the screens need: currency formatting, human-readable
//! dates, duration in whole hours, and the status-to-emphasis mapping.
//! No business logic lives here beyond formatting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of an event.
///
/// The wire format is an open upper-case string; unknown values are
/// preserved losslessly in the [`EventStatus::Other`] variant rather than
/// being coerced or rejected, so a record fetched from a newer server can
/// be re-submitted unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventStatus {
    /// The event is underway. Default for newly created drafts.
    Started,
    /// The event has finished.
    Completed,
    /// The event is on hold.
    Paused,
    /// Any status string this client does not know about.
    Other(String),
}

impl EventStatus {
    /// Returns the wire/display label for this status.
    ///
    /// # Examples
    ///
    /// ```
    /// use eventdeck::domain::EventStatus;
    ///
    /// assert_eq!(EventStatus::Started.label(), "STARTED");
    /// assert_eq!(EventStatus::Other("ARCHIVED".into()).label(), "ARCHIVED");
    /// ```
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Started => "STARTED",
            Self::Completed => "COMPLETED",
            Self::Paused => "PAUSED",
            Self::Other(s) => s,
        }
    }

    /// Maps this status to its visual emphasis.
    ///
    /// Started is the primary accent, Completed reads as success, Paused as
    /// a warning, and anything else stays neutral.
    #[must_use]
    pub const fn emphasis(&self) -> Emphasis {
        match self {
            Self::Started => Emphasis::Primary,
            Self::Completed => Emphasis::Success,
            Self::Paused => Emphasis::Warning,
            Self::Other(_) => Emphasis::Neutral,
        }
    }

    /// Returns the next status in the form's cycling order.
    ///
    /// Cycles Started → Completed → Paused → Started. An unknown status
    /// re-enters the cycle at Started.
    #[must_use]
    pub fn cycled_forward(&self) -> Self {
        match self {
            Self::Started => Self::Completed,
            Self::Completed => Self::Paused,
            Self::Paused | Self::Other(_) => Self::Started,
        }
    }

    /// Returns the previous status in the form's cycling order.
    #[must_use]
    pub fn cycled_back(&self) -> Self {
        match self {
            Self::Started | Self::Other(_) => Self::Paused,
            Self::Completed => Self::Started,
            Self::Paused => Self::Completed,
        }
    }
}

impl Default for EventStatus {
    fn default() -> Self {
        Self::Started
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for EventStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "STARTED" => Self::Started,
            "COMPLETED" => Self::Completed,
            "PAUSED" => Self::Paused,
            _ => Self::Other(value),
        }
    }
}

impl From<EventStatus> for String {
    fn from(value: EventStatus) -> Self {
        value.label().to_string()
    }
}

/// Visual emphasis derived from an event's status.
///
/// The UI theme maps each emphasis to a concrete color; the domain layer
/// only knows the semantic weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// Primary accent (in-progress work).
    Primary,
    /// Success accent (finished work).
    Success,
    /// Warning accent (work on hold).
    Warning,
    /// No accent (anything unrecognized).
    Neutral,
}

/// An event as served by the API.
///
/// The `id` is assigned by the server on creation and immutable afterwards.
/// Timestamps are carried as UTC instants and serialized as ISO-8601 strings;
/// the client performs no timezone conversion beyond display formatting.
///
/// # Fields
///
/// - `id`: Server-assigned identifier
/// - `title`: Required, non-empty display title
/// - `start_date` / `end_date`: Event time window (`startDate`/`endDate` on the wire)
/// - `price`: Ticket price, expected ≥ 0
/// - `status`: Lifecycle state, default Started on creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: i64,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub price: f64,
    pub status: EventStatus,
}

impl EventRecord {
    /// Returns the event duration in whole hours, truncating any fractional
    /// remainder toward zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use eventdeck::domain::{EventRecord, EventStatus};
    ///
    /// let event = EventRecord {
    ///     id: 1,
    ///     title: "Workshop".to_string(),
    ///     start_date: Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
    ///     end_date: Utc.with_ymd_and_hms(2024, 1, 1, 13, 30, 0).unwrap(),
    ///     price: 10.0,
    ///     status: EventStatus::Started,
    /// };
    /// assert_eq!(event.duration_hours(), 3);
    /// ```
    #[must_use]
    pub fn duration_hours(&self) -> i64 {
        self.end_date
            .signed_duration_since(self.start_date)
            .num_hours()
    }

    /// Returns the price formatted as currency.
    #[must_use]
    pub fn price_display(&self) -> String {
        format_price(self.price)
    }

    /// Strips the identifier off, yielding the payload for an update.
    ///
    /// Updates are full replacements, so the draft carries every field.
    #[must_use]
    pub fn to_draft(&self) -> EventDraft {
        EventDraft {
            title: self.title.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            price: self.price,
            status: self.status.clone(),
        }
    }
}

/// An event payload without a server-assigned identifier.
///
/// Submitted on creation (the server answers with the full [`EventRecord`])
/// and on update (full replacement of all fields).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub price: f64,
    pub status: EventStatus,
}

/// Formats a price as dollars with two decimals.
///
/// # Examples
///
/// ```
/// assert_eq!(eventdeck::domain::event::format_price(25.0), "$25.00");
/// assert_eq!(eventdeck::domain::event::format_price(9.5), "$9.50");
/// ```
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Formats a timestamp in the short table form, e.g. `Jan 05, 2024 18:00`.
#[must_use]
pub fn format_short(ts: &DateTime<Utc>) -> String {
    ts.format("%b %d, %Y %H:%M").to_string()
}

/// Formats a timestamp in the long detail form, e.g.
/// `January 05, 2024 at 18:00`.
#[must_use]
pub fn format_long(ts: &DateTime<Utc>) -> String {
    ts.format("%B %d, %Y at %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(start: (u32, u32), end: (u32, u32)) -> EventRecord {
        EventRecord {
            id: 7,
            title: "Rust meetup".to_string(),
            start_date: Utc
                .with_ymd_and_hms(2024, 1, 1, start.0, start.1, 0)
                .unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 1, 1, end.0, end.1, 0).unwrap(),
            price: 12.5,
            status: EventStatus::Started,
        }
    }

    #[test]
    fn duration_truncates_fractional_hours() {
        let event = sample((10, 0), (13, 30));
        assert_eq!(event.duration_hours(), 3);
    }

    #[test]
    fn duration_exact_hours() {
        let event = sample((10, 0), (12, 0));
        assert_eq!(event.duration_hours(), 2);
    }

    #[test]
    fn status_maps_to_emphasis() {
        assert_eq!(EventStatus::Started.emphasis(), Emphasis::Primary);
        assert_eq!(EventStatus::Completed.emphasis(), Emphasis::Success);
        assert_eq!(EventStatus::Paused.emphasis(), Emphasis::Warning);
        assert_eq!(
            EventStatus::Other("CANCELLED".into()).emphasis(),
            Emphasis::Neutral
        );
    }

    #[test]
    fn unknown_status_round_trips_through_serde() {
        let status: EventStatus = serde_json::from_str("\"ARCHIVED\"").unwrap();
        assert_eq!(status, EventStatus::Other("ARCHIVED".to_string()));
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"ARCHIVED\"");
    }

    #[test]
    fn record_uses_camel_case_wire_fields() {
        let json = r#"{
            "id": 42,
            "title": "Launch party",
            "startDate": "2024-01-05T18:00:00Z",
            "endDate": "2024-01-05T22:00:00Z",
            "price": 25.0,
            "status": "COMPLETED"
        }"#;
        let event: EventRecord = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, 42);
        assert_eq!(event.status, EventStatus::Completed);

        let out = serde_json::to_string(&event).unwrap();
        assert!(out.contains("\"startDate\""));
        assert!(out.contains("\"endDate\""));
        assert!(!out.contains("start_date"));
    }

    #[test]
    fn draft_keeps_every_field_for_full_replacement() {
        let event = sample((9, 0), (17, 0));
        let draft = event.to_draft();
        assert_eq!(draft.title, event.title);
        assert_eq!(draft.start_date, event.start_date);
        assert_eq!(draft.end_date, event.end_date);
        assert!((draft.price - event.price).abs() < f64::EPSILON);
        assert_eq!(draft.status, event.status);
    }

    #[test]
    fn display_formats() {
        let event = sample((18, 0), (22, 0));
        assert_eq!(event.price_display(), "$12.50");
        assert_eq!(format_short(&event.start_date), "Jan 01, 2024 18:00");
        assert_eq!(format_long(&event.start_date), "January 01, 2024 at 18:00");
    }

    #[test]
    fn status_cycle_is_closed() {
        let mut status = EventStatus::Started;
        for _ in 0..3 {
            status = status.cycled_forward();
        }
        assert_eq!(status, EventStatus::Started);
        assert_eq!(
            EventStatus::Other("ARCHIVED".into()).cycled_forward(),
            EventStatus::Started
        );
        assert_eq!(EventStatus::Started.cycled_back(), EventStatus::Paused);
    }
}
