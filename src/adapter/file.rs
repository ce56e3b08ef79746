//! Appends uncolored lines to a file named by the adapter's configuration.
//!
//! Config keys:
//! - `path` (string, required): target file, `~` expanded. Without it the adapter is idle.
//! - `time_format` (string): strftime layout, defaults to [`layout::DEFAULT`].

use super::{Adapter, AdapterConfig, LogRecord};
use crate::clock::{Clock, SystemClock};
use crate::fmt::{layout, render_plain, strip_ansi};
use crate::internal;

use parking_lot::Mutex;
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

/// File sink. Line and formatted calls alike become one newline-terminated line.
pub struct FileAdapter {
    clock: Arc<dyn Clock>,
    /// Serializes appends so concurrent callers never interleave within a line.
    write_lock: Mutex<()>,
}

impl Default for FileAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl FileAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Shares the logger's clock so file and console timestamps agree.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            write_lock: Mutex::new(()),
        }
    }

    /// Fallible core of [`Adapter::handle`].
    ///
    /// # Errors
    /// Returns an error if the layout is invalid or the file can't be created or appended to.
    pub fn write(
        &self,
        record: &LogRecord<'_>,
        config: &AdapterConfig,
    ) -> Result<(), crate::Error> {
        let Some(path) = config.get("path").and_then(Value::as_str) else {
            return Ok(());
        };
        let time_format = config
            .get("time_format")
            .and_then(Value::as_str)
            .unwrap_or(layout::DEFAULT);
        layout::validate(time_format)?;

        let line = strip_ansi(&render_plain(record, time_format, &self.clock.now()));
        let path = PathBuf::from(shellexpand::tilde(path).into_owned());

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let _guard = self.write_lock.lock();
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(format!("{line}\n").as_bytes())?;

        Ok(())
    }
}

impl Adapter for FileAdapter {
    fn handle(&self, record: &LogRecord<'_>, config: &AdapterConfig) {
        if let Err(e) = self.write(record, config) {
            internal::warning("FILE", &format!("Failed to write log file: {e}"));
        }
    }
}
