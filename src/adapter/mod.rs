//! Named adapters receive every record after the console write. Each one carries a
//! private configuration map that can be replaced at runtime.

mod file;
mod registry;

pub use file::FileAdapter;
pub use registry::AdapterRegistry;

use crate::fmt::{self, Arg};
use crate::severity::{OutputKind, Severity};
use std::panic::Location;
use std::path::Path;

/// Free-form per-adapter settings: string keys, arbitrary JSON-like values.
pub type AdapterConfig = serde_json::Map<String, serde_json::Value>;

/// Everything a log call carried, unrendered, so each adapter can format it its own way.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub severity: Severity,
    pub kind: OutputKind,
    /// Present only for formatted calls.
    pub format: Option<&'a str>,
    pub args: &'a [Arg],
    /// Call site of debug calls.
    pub location: Option<&'static Location<'static>>,
}

impl<'a> LogRecord<'a> {
    #[must_use]
    pub const fn line(severity: Severity, args: &'a [Arg]) -> Self {
        Self {
            severity,
            kind: OutputKind::Line,
            format: None,
            args,
            location: None,
        }
    }

    #[must_use]
    pub const fn formatted(severity: Severity, format: &'a str, args: &'a [Arg]) -> Self {
        Self {
            severity,
            kind: OutputKind::Formatted,
            format: Some(format),
            args,
            location: None,
        }
    }

    #[must_use]
    pub const fn at(mut self, location: &'static Location<'static>) -> Self {
        self.location = Some(location);
        self
    }

    /// `[msg]`, `[error]`, `[warning]`, or `[debug] file.rs:42` when a location is attached.
    #[must_use]
    pub fn tag(&self) -> String {
        let name = self.severity.as_str();
        match self.location {
            Some(loc) if self.severity == Severity::Debug => {
                let file = Path::new(loc.file())
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or_else(|| loc.file());
                format!("[{name}] {file}:{}", loc.line())
            }
            _ => format!("[{name}]"),
        }
    }

    /// Message text: printf substitution for formatted calls, space-joined arguments otherwise.
    #[must_use]
    pub fn body(&self) -> String {
        self.format.map_or_else(
            || fmt::join(self.args),
            |format| fmt::sprintf(format, self.args),
        )
    }
}

/// `Send + Sync` because dispatch runs on whichever thread made the log call.
pub trait Adapter: Send + Sync {
    /// Called once per non-suppressed log call. Must not block indefinitely: dispatch is
    /// synchronous and a stalled adapter stalls the caller.
    fn handle(&self, record: &LogRecord<'_>, config: &AdapterConfig);
}

/// Adapter backed by a closure.
pub struct FnAdapter<F>(F);

/// Wraps a closure as an [`Adapter`].
pub const fn from_fn<F>(f: F) -> FnAdapter<F>
where
    F: Fn(&LogRecord<'_>, &AdapterConfig) + Send + Sync,
{
    FnAdapter(f)
}

impl<F> Adapter for FnAdapter<F>
where
    F: Fn(&LogRecord<'_>, &AdapterConfig) + Send + Sync,
{
    fn handle(&self, record: &LogRecord<'_>, config: &AdapterConfig) {
        (self.0)(record, config);
    }
}
