//! Diagnostic logging with file-based output.
//!
//! This module provides the observability pipeline for the client. Because
//! stdout is owned by the UI (raw mode, alternate screen), diagnostics are
//! written to a rotating log file under the platform data directory.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → LogWriter → rotating file
//! ```
//!
//! # Configuration
//!
//! The filter is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `EVENTDECK_LOG` / `--log-level` configuration
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
mod init;

pub use init::init_tracing;
