//! Append-only line file with size-based rotation.
//!
//! Once the active file grows past its size limit it is renamed to
//! `<name>.<UTC timestamp>` and a fresh file is started. Only the newest
//! backups are kept.

use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotate once the active file is larger than this (10 MiB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Rotated files kept next to the active one.
pub const MAX_BACKUP_FILES: usize = 3;

/// Sortable suffix for rotated files.
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S%.6f";

/// Thread-safe rotating writer for newline-delimited records.
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    /// Opened lazily on first write, dropped on rotation.
    file: Mutex<Option<File>>,
}

impl RotatingFile {
    pub fn new(path: PathBuf) -> Self {
        Self::with_limits(path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    pub fn with_limits(path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from rotating, opening or writing the file, or
    /// an error if the lock was poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace file lock poisoned: {e}")))?;

        if fs::metadata(&self.path).is_ok_and(|metadata| metadata.len() > self.max_bytes) {
            *file = None;
            self.rotate()?;
        }

        let handle = match file.take() {
            Some(handle) => handle,
            None => OpenOptions::new().create(true).append(true).open(&self.path)?,
        };
        let handle = file.insert(handle);

        writeln!(handle, "{line}")?;
        handle.flush()
    }

    fn rotate(&self) -> io::Result<()> {
        let suffix = Utc::now().format(BACKUP_TIMESTAMP_FORMAT);
        let mut backup = self.path.clone().into_os_string();
        backup.push(format!(".{suffix}"));
        fs::rename(&self.path, PathBuf::from(backup))?;

        self.prune_backups()
    }

    /// Deletes all but the newest `max_backups` rotated files.
    fn prune_backups(&self) -> io::Result<()> {
        let mut backups = self.backups()?;
        backups.sort();

        let excess = backups.len().saturating_sub(self.max_backups);
        for old in backups.iter().take(excess) {
            if let Err(e) = fs::remove_file(old) {
                eprintln!("failed to remove old trace file {}: {e}", old.display());
            }
        }
        Ok(())
    }

    /// Rotated siblings of the active file.
    fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let Some(name) = self.path.file_name().and_then(|name| name.to_str()) else {
            return Ok(vec![]);
        };
        let prefix = format!("{name}.");
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));

        Ok(fs::read_dir(dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|file_name| file_name.to_str())
                    .is_some_and(|file_name| file_name.starts_with(&prefix))
            })
            .collect())
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}
