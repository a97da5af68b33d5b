//! Rotating file writer with size-based rotation and backup retention.
//!
//! This module provides a thread-safe file writer that automatically
//! rotates files when they exceed a size threshold, maintaining a fixed
//! number of backup files. This prevents unbounded disk usage for log
//! files, and gives the tracing subscriber a `MakeWriter` it can hand to
//! the fmt layer.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// When the current file exceeds `MAX_FILE_SIZE_BYTES`, it is renamed with
/// a timestamp suffix and a new file is created. Old backups beyond
/// `MAX_BACKUP_FILES` are automatically cleaned up.
///
/// # Thread Safety
///
/// Uses an internal `Mutex`; multiple threads can safely write to the same
/// `FileWriter` instance.
pub struct FileWriter {
    /// Path to the primary log file.
    file_path: PathBuf,
    /// Lazily-initialized file handle (opens on first write).
    writer: Mutex<Option<std::fs::File>>,
}

impl FileWriter {
    /// Creates a new file writer for the given path.
    ///
    /// The file is not opened until the first write operation, so
    /// construction succeeds even if the file cannot be opened yet.
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            writer: Mutex::new(None),
        }
    }

    /// Appends bytes to the file with automatic rotation.
    ///
    /// Checks file size before writing and rotates if necessary. Data is
    /// flushed to disk immediately so a crash loses nothing.
    ///
    /// # Errors
    ///
    /// May fail due to filesystem permissions, disk exhaustion, or a
    /// poisoned mutex (if another thread panicked while holding the lock).
    pub fn append(&self, buf: &[u8]) -> std::io::Result<usize> {
        let mut writer = self.writer.lock().map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::Other, format!("Mutex poisoned: {e}"))
        })?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "No file available"))?;

        file.write_all(buf)?;
        file.flush()?;
        drop(writer);

        Ok(buf.len())
    }

    /// Checks file size and rotates if necessary.
    ///
    /// If the current file exceeds `MAX_FILE_SIZE_BYTES`, closes the handle
    /// and triggers rotation.
    fn check_and_rotate(&self, writer: &mut Option<std::fs::File>) -> std::io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > MAX_FILE_SIZE_BYTES {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    /// Rotates the current file and cleans up old backups.
    ///
    /// # Backup Naming
    ///
    /// Backups are named: `<original_name>.log.<unix_timestamp>`
    fn rotate_files(&self) -> std::io::Result<()> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or(std::time::Duration::from_secs(0))
            .as_secs();

        let backup_path = self.file_path.with_extension(format!("log.{timestamp}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()?;

        Ok(())
    }

    /// Removes old backup files beyond the retention limit.
    ///
    /// Scans the directory for backups matching `<name>.log.*`, sorts by
    /// modification time (newest first), and deletes the rest. Individual
    /// deletion errors are ignored so cleanup continues.
    fn cleanup_old_backups(&self) -> std::io::Result<()> {
        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "No parent directory"))?;

        let file_stem = self
            .file_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "Invalid file name"))?;

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(file_stem) && name.contains(".log."))
            })
            .collect();

        backups.sort_by(|a, b| {
            let a_time = fs::metadata(a).and_then(|m| m.modified()).ok();
            let b_time = fs::metadata(b).and_then(|m| m.modified()).ok();
            b_time.cmp(&a_time)
        });

        for old_backup in backups.iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

/// Cloneable handle implementing `MakeWriter` over a shared [`FileWriter`].
///
/// The tracing fmt layer requests a writer per event; every handle appends
/// through the same rotating file.
#[derive(Debug, Clone)]
pub struct LogWriter {
    inner: Arc<FileWriter>,
}

impl LogWriter {
    /// Creates a handle writing to the given path.
    #[must_use]
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            inner: Arc::new(FileWriter::new(file_path)),
        }
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.append(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        // append() flushes on every call.
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_creates_and_writes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("eventdeck.log");
        let writer = FileWriter::new(path.clone());

        writer.append(b"first line\n").unwrap();
        writer.append(b"second line\n").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first line\nsecond line\n");
    }

    #[test]
    fn log_writer_handles_share_one_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("eventdeck.log");
        let writer = LogWriter::new(path.clone());
        let mut a = writer.clone();
        let mut b = writer;

        a.write_all(b"from a\n").unwrap();
        b.write_all(b"from b\n").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("from a"));
        assert!(contents.contains("from b"));
    }
}
