//! Platform path resolution.
//!
//! This module resolves the directory where the client keeps its log files,
//! using the platform's conventional data location.

use std::path::PathBuf;

/// Returns the data directory for eventdeck files.
///
/// Resolves to `<platform data dir>/eventdeck` (e.g.
/// `~/.local/share/eventdeck` on Linux, `~/Library/Application Support/eventdeck`
/// on macOS). Falls back to the current directory when the platform
/// provides no data location.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("eventdeck")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_ends_with_the_app_name() {
        assert!(data_dir().ends_with("eventdeck"));
    }
}
