//! Severities pick the color and bracketed tag of a line; output kinds pick how the
//! arguments become a body.

use crate::fmt::Color;
use std::fmt;
use std::str::FromStr;

/// Classification of a log call. There is no threshold ordering: only `Debug` can be
/// switched off, and that is done by debug mode rather than a minimum level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Ordinary operational output.
    #[default]
    Message,
    /// Failures the caller reports but does not necessarily abort on.
    Error,
    /// Anomalies worth a look.
    Warning,
    /// Development diagnostics, dropped entirely unless debug mode is on.
    Debug,
}

impl Severity {
    /// Text placed between the brackets of the rendered tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Message => "msg",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Debug => "debug",
        }
    }

    /// Fixed foreground color of the whole rendered line.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Message => Color::WHITE,
            Self::Error => Color::BRIGHT_RED,
            Self::Warning => Color::BRIGHT_YELLOW,
            Self::Debug => Color::BRIGHT_CYAN,
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Message, Self::Error, Self::Warning, Self::Debug]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown severity" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity: '{}'", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "msg" | "message" | "info" => Ok(Self::Message),
            "error" | "err" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "debug" => Ok(Self::Debug),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

/// How the arguments of a call are turned into the message body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputKind {
    /// Arguments joined by single spaces, newline-terminated.
    #[default]
    Line,
    /// printf-style substitution into a format string, no trailing newline.
    Formatted,
}

impl OutputKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Formatted => "formatted",
        }
    }

    /// Only line output terminates itself.
    #[must_use]
    pub const fn terminator(self) -> &'static str {
        match self {
            Self::Line => "\n",
            Self::Formatted => "",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
