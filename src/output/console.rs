//! Stdout sink (the default) and a generic `Write` sink.

use super::Output;
use parking_lot::Mutex;
use std::io::{self, Write};

/// Writes to the process's standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Output for ConsoleOutput {
    fn write(&self, rendered: &str) -> Result<(), crate::Error> {
        let mut out = io::stdout().lock();
        out.write_all(rendered.as_bytes())?;
        // Formatted output has no newline, so line buffering alone would hold it back
        out.flush()?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        Ok(())
    }
}

/// Wraps any writer (stderr, a socket, a file handle) as a console sink.
pub struct WriterOutput<W> {
    inner: Mutex<W>,
}

impl<W: Write + Send> WriterOutput<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: Mutex::new(writer),
        }
    }
}

impl<W: Write + Send> Output for WriterOutput<W> {
    fn write(&self, rendered: &str) -> Result<(), crate::Error> {
        self.inner.lock().write_all(rendered.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        self.inner.lock().flush()?;
        Ok(())
    }
}
