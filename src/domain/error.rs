//! Error types for eventdeck.
//!
//! This module defines the centralized error type [`EventdeckError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.
//!
//! Failures raised by the HTTP client have their own taxonomy in
//! [`crate::api::ApiError`]; they cross into this type only as the
//! already-derived user-facing message carried by a worker response.

use thiserror::Error;

/// The main error type for eventdeck operations.
///
/// This enum consolidates the error conditions that can occur outside the
/// API client itself: configuration problems, theme loading, worker channel
/// failures, I/O, and rejected form input.
#[derive(Debug, Error)]
pub enum EventdeckError {
    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are malformed, for example
    /// an empty API base URL. The string describes the specific problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing or application failed.
    ///
    /// Occurs when a theme file cannot be read or its TOML cannot be parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    ///
    /// Occurs when the request channel to the operations worker is closed,
    /// which only happens if the worker thread has died.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Filesystem or terminal I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically
    /// converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Form input was rejected before submission.
    ///
    /// The message is already user-facing (field problems joined with
    /// `", "`), so no prefix is added when displaying it.
    #[error("{0}")]
    InvalidInput(String),
}

/// A specialized `Result` type for eventdeck operations.
///
/// This is a type alias for `std::result::Result<T, EventdeckError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, EventdeckError>;
