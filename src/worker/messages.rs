//! Worker message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the main
//! thread and the background worker that performs HTTP operations. Every
//! request carries a sequence tag issued by the application state; the
//! worker echoes the tag on the response so the handler can discard answers
//! that arrive after the user has already moved on.

use crate::domain::{EventDraft, EventRecord};

/// Requests sent from the main thread to the operations worker.
///
/// Each variant corresponds to one API operation. The `seq` tag is a
/// monotonically increasing number; a response is only applied when its tag
/// matches the latest issued request.
#[derive(Debug, Clone, PartialEq)]
pub enum OpsRequest {
    /// Fetch the full event collection.
    ListEvents { seq: u64 },

    /// Fetch a single event by identifier.
    GetEvent { seq: u64, id: i64 },

    /// Create an event from a draft; the server assigns the identifier.
    CreateEvent { seq: u64, draft: EventDraft },

    /// Replace every field of an existing event.
    UpdateEvent {
        seq: u64,
        id: i64,
        draft: EventDraft,
    },

    /// Delete an event by identifier.
    DeleteEvent { seq: u64, id: i64 },
}

impl OpsRequest {
    /// Returns the sequence tag carried by this request.
    #[must_use]
    pub const fn seq(&self) -> u64 {
        match self {
            Self::ListEvents { seq }
            | Self::GetEvent { seq, .. }
            | Self::CreateEvent { seq, .. }
            | Self::UpdateEvent { seq, .. }
            | Self::DeleteEvent { seq, .. } => *seq,
        }
    }

    /// Returns a short operation name for logging.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::ListEvents { .. } => "list events",
            Self::GetEvent { .. } => "fetch event",
            Self::CreateEvent { .. } => "create event",
            Self::UpdateEvent { .. } => "update event",
            Self::DeleteEvent { .. } => "delete event",
        }
    }
}

/// Responses sent from the worker back to the main thread.
///
/// Each variant corresponds to the completion of one operation, either with
/// result data, with a distinct missing-resource outcome, or with an
/// already-derived user-facing error message.
#[derive(Debug, Clone, PartialEq)]
pub enum OpsResponse {
    /// The event collection was fetched.
    EventsListed {
        seq: u64,
        events: Vec<EventRecord>,
    },

    /// A single event was fetched.
    EventFetched { seq: u64, event: EventRecord },

    /// A create or update completed; `event` is the server's record.
    EventSaved { seq: u64, event: EventRecord },

    /// A delete completed.
    EventDeleted { seq: u64, id: i64 },

    /// The server reported the requested event absent.
    ///
    /// Kept separate from [`OpsResponse::Failed`] because screens render a
    /// distinct not-found state, not an error notice.
    EventMissing { seq: u64, id: i64 },

    /// The operation failed; `message` is ready for display.
    Failed { seq: u64, message: String },
}

impl OpsResponse {
    /// Returns the sequence tag echoed by this response.
    #[must_use]
    pub const fn seq(&self) -> u64 {
        match self {
            Self::EventsListed { seq, .. }
            | Self::EventFetched { seq, .. }
            | Self::EventSaved { seq, .. }
            | Self::EventDeleted { seq, .. }
            | Self::EventMissing { seq, .. }
            | Self::Failed { seq, .. } => *seq,
        }
    }
}
