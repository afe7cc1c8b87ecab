//! File sink implementation

use crate::core::{LoggerError, Result, Sink};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Appends lines to a file.
///
/// Writes go straight to the file handle with no buffering, so a line is on
/// disk (or at least in the OS cache) once the logging call returns.
pub struct FileSink {
    file: File,
    path: PathBuf,
    name: String,
}

impl FileSink {
    /// Open `path` for appending, creating it if needed.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}' for appending", path.display()),
                    e,
                )
            })?;
        let name = format!("file:{}", path.display());

        Ok(Self { file, path, name })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.file.write_all(text.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        if let Err(e) = self.file.sync_data() {
            eprintln!(
                "[LOGGER ERROR] Failed to sync '{}' on close: {}",
                self.path.display(),
                e
            );
        }
    }
}
