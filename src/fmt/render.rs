//! Turns one log record into the colored, timestamped line written to the console.
//!
//! Layout: `<color><timestamp> <tag> <body><reset>` plus a newline for line output.
//! When `max_line_size` is non-zero and the uncolored `<timestamp> <tag> <body>` is longer,
//! it is cut to exactly that many characters and `...` goes in front of the reset.

use super::{colorize, layout};
use crate::adapter::LogRecord;
use crate::config::Settings;
use chrono::{DateTime, Local};

/// Appended to a line cut at `max_line_size`.
pub const ELLIPSIS: &str = "...";

/// Full console rendering: color, truncation and terminator.
#[must_use]
pub fn render(record: &LogRecord<'_>, settings: &Settings, now: &DateTime<Local>) -> String {
    let content = render_plain(record, &settings.time_format, now);
    let (content, ellipsis) = truncate(&content, settings.max_line_size);
    let line = colorize(&format!("{content}{ellipsis}"), record.severity.color());
    let terminator = record.kind.terminator();

    format!("{line}{terminator}")
}

/// `<timestamp> <tag> <body>` without color, truncation or terminator. Adapters that
/// re-render for plain-text sinks start from this.
#[must_use]
pub fn render_plain(record: &LogRecord<'_>, time_format: &str, now: &DateTime<Local>) -> String {
    let timestamp = layout::timestamp(now, time_format);
    let tag = record.tag();
    let body = record.body();
    format!("{timestamp} {tag} {body}")
}

/// Splits at a char boundary so multi-byte text is never cut mid-character.
fn truncate(content: &str, max: usize) -> (&str, &'static str) {
    if max == 0 {
        return (content, "");
    }
    content
        .char_indices()
        .nth(max)
        .map_or((content, ""), |(idx, _)| (&content[..idx], ELLIPSIS))
}
