//! Background worker thread for asynchronous API operations.
//!
//! This module implements the worker that performs all HTTP I/O off the
//! render loop. The main thread sends [`OpsRequest`] values over an mpsc
//! channel and drains [`OpsResponse`] values each tick, so a slow or dead
//! server can never freeze the UI.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with sequence tagging
//! - `handler`: Worker implementation and request processing logic

pub mod handler;
pub mod messages;

pub use handler::OpsWorker;
pub use messages::{OpsRequest, OpsResponse};
