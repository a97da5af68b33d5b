//! Actions representing side effects to be executed by the terminal shell.
//!
//! This module defines the [`Action`] type, which represents imperative
//! commands produced by the event handler after processing user input or
//! worker responses. Actions bridge pure state transformations and effectful
//! operations like posting API work to the background thread or shutting the
//! application down.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The shell in
//! `main.rs` executes them in sequence.

use crate::worker::OpsRequest;

/// Commands representing side effects to be executed by the terminal shell.
///
/// Actions are produced by the event handler and executed by the shell.
/// They represent the boundary between pure state transformations and
/// effectful operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Exits the application, restoring the terminal.
    ///
    /// Sent when the user explicitly requests to quit (e.g. pressing 'q').
    Quit,

    /// Posts a request to the background operations worker.
    ///
    /// Enables HTTP calls without blocking the render loop; the worker's
    /// answer arrives later as a
    /// [`WorkerResponse`](crate::app::Event::WorkerResponse) event.
    PostToWorker(OpsRequest),
}
