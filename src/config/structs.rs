//! Configuration struct definitions.

use crate::fmt::layout;
use serde::Deserialize;

/// Formatting state read by every render. Swapped as a whole, never mutated in place
/// while a render holds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Debug calls are dropped entirely while this is off.
    pub debug_mode: bool,
    /// strftime layout of the timestamp.
    pub time_format: String,
    /// Character limit of `<timestamp> <tag> <body>`; 0 means unbounded.
    pub max_line_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_mode: false,
            time_format: layout::DEFAULT.to_string(),
            max_line_size: 0,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn debug_mode(mut self, enabled: bool) -> Self {
        self.debug_mode = enabled;
        self
    }

    #[must_use]
    pub fn time_format(mut self, layout: impl Into<String>) -> Self {
        self.time_format = layout.into();
        self
    }

    #[must_use]
    pub const fn max_line_size(mut self, size: usize) -> Self {
        self.max_line_size = size;
        self
    }

    /// # Errors
    /// Returns `Error::InvalidTimeFormat` if the layout can't be rendered.
    pub fn validate(&self) -> Result<(), crate::Error> {
        layout::validate(&self.time_format)
    }
}

/// `[general]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Show debug calls.
    pub debug: bool,
    /// Timestamp layout (strftime).
    pub time_format: String,
    /// Maximum rendered line length, 0 for unbounded.
    pub max_line_size: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            debug: settings.debug_mode,
            time_format: settings.time_format,
            max_line_size: settings.max_line_size,
        }
    }
}
