//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber with an env-filter and a
//! fmt layer writing through the rotating file writer. Logs go to a file
//! because stdout belongs to the UI while the terminal is in raw mode.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::file_writer::LogWriter;
use crate::Config;

/// Initializes the tracing subscriber with file-based output.
///
/// # Trace Level Resolution
///
/// 1. `RUST_LOG` environment variable (highest priority)
/// 2. `log_level` from configuration
/// 3. Default: `"info"`
///
/// # File Location
///
/// Logs are written to `eventdeck.log` under the platform data directory
/// (e.g. `~/.local/share/eventdeck` on Linux), rotating at 10 MB with
/// 3 backups retained.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently does nothing if directory creation fails (diagnostics are
///   optional; the UI must still run)
/// - Idempotent: only the first call takes effect
pub fn init_tracing(config: &Config) {
    let level = config
        .log_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = LogWriter::new(data_dir.join("eventdeck.log"));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_writer(writer),
    );

    let _ = subscriber.try_init();
}
