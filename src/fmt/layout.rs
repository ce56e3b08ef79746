//! Timestamp layouts (chrono strftime syntax) and the named layouts callers usually want.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use std::fmt::{Display, Write};

/// `2017/06/25 15:49:04`
pub const DEFAULT: &str = "%Y/%m/%d %H:%M:%S";
/// `2017-06-25T15:49:04+02:00`
pub const RFC3339: &str = "%Y-%m-%dT%H:%M:%S%:z";
/// `Sun, 25 Jun 2017 15:49:04 +0200`
pub const RFC1123: &str = "%a, %d %b %Y %H:%M:%S %z";
/// `Sun Jun 25 15:49:04 2017`
pub const ANSIC: &str = "%a %b %e %H:%M:%S %Y";
/// `3:49PM`
pub const KITCHEN: &str = "%-I:%M%p";
/// `Jun 25 15:49:04`
pub const STAMP: &str = "%b %e %H:%M:%S";
/// `2017-06-25 15:49:04`
pub const DATE_TIME: &str = "%Y-%m-%d %H:%M:%S";

/// Rejects layouts chrono would fail on at render time.
///
/// # Errors
/// Returns `Error::InvalidTimeFormat` if any specifier is unknown or malformed.
pub fn validate(layout: &str) -> Result<(), crate::Error> {
    if StrftimeItems::new(layout).any(|item| matches!(item, Item::Error)) {
        return Err(crate::Error::InvalidTimeFormat(layout.to_string()));
    }
    Ok(())
}

/// Formats `now` with `layout`. A layout that slipped past validation falls back to
/// [`DEFAULT`] instead of failing the log call.
pub fn timestamp<Tz>(now: &DateTime<Tz>, layout: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    if write!(out, "{}", now.format(layout)).is_err() {
        out.clear();
        let _ = write!(out, "{}", now.format(DEFAULT));
    }
    out
}
