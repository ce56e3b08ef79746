//! Stepwise construction of a [`Logger`]: settings, clock, console sink and any adapters
//! to register up front.

use super::Logger;
use crate::adapter::{Adapter, AdapterConfig, AdapterRegistry, FileAdapter};
use crate::clock::{Clock, SystemClock};
use crate::config::Settings;
use crate::output::{ConsoleOutput, Output};

use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;

enum PendingAdapter {
    Custom(Arc<dyn Adapter>),
    /// Built last so it shares whatever clock the builder ends up with.
    File,
}

/// Defaults: stdout sink, wall clock, debug off, `layout::DEFAULT`, no truncation.
pub struct LoggerBuilder {
    settings: Settings,
    clock: Arc<dyn Clock>,
    console: Arc<dyn Output>,
    adapters: Vec<(String, PendingAdapter, AdapterConfig)>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
            clock: Arc::new(SystemClock),
            console: Arc::new(ConsoleOutput),
            adapters: Vec::new(),
        }
    }

    #[must_use]
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub const fn debug_mode(mut self, enabled: bool) -> Self {
        self.settings.debug_mode = enabled;
        self
    }

    /// Not validated here: a layout chrono can't render falls back to `layout::DEFAULT`
    /// at render time. Use [`Logger::set_time_format`] to get the error instead.
    #[must_use]
    pub fn time_format(mut self, layout: impl Into<String>) -> Self {
        self.settings.time_format = layout.into();
        self
    }

    #[must_use]
    pub const fn max_line_size(mut self, size: usize) -> Self {
        self.settings.max_line_size = size;
        self
    }

    /// Tests pin the clock so rendered lines are byte-stable.
    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Replaces stdout as the sink every rendered line goes to.
    #[must_use]
    pub fn output(mut self, output: impl Output + 'static) -> Self {
        self.console = Arc::new(output);
        self
    }

    #[must_use]
    pub fn adapter(
        mut self,
        name: impl Into<String>,
        adapter: impl Adapter + 'static,
        config: AdapterConfig,
    ) -> Self {
        self.adapters
            .push((name.into(), PendingAdapter::Custom(Arc::new(adapter)), config));
        self
    }

    /// File adapter has its own config keys, so it gets a dedicated sub-builder.
    #[must_use]
    pub fn file(self) -> FileBuilder {
        FileBuilder {
            parent: self,
            name: "file".to_string(),
            config: AdapterConfig::new(),
        }
    }

    #[must_use]
    pub fn build(self) -> Logger {
        let adapters = AdapterRegistry::new();
        for (name, pending, config) in self.adapters {
            let adapter: Arc<dyn Adapter> = match pending {
                PendingAdapter::Custom(adapter) => adapter,
                PendingAdapter::File => Arc::new(FileAdapter::with_clock(Arc::clone(&self.clock))),
            };
            adapters.add(name, adapter, config);
        }

        Logger {
            settings: RwLock::new(Arc::new(self.settings)),
            clock: RwLock::new(self.clock),
            console: self.console,
            adapters,
        }
    }
}

/// Collects the file adapter's config keys before handing control back to the parent.
pub struct FileBuilder {
    parent: LoggerBuilder,
    name: String,
    config: AdapterConfig,
}

impl FileBuilder {
    /// Registry name, `"file"` unless changed.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.config
            .insert("path".to_string(), Value::String(path.into()));
        self
    }

    #[must_use]
    pub fn time_format(mut self, layout: impl Into<String>) -> Self {
        self.config
            .insert("time_format".to_string(), Value::String(layout.into()));
        self
    }

    /// Starts from an existing config map, e.g. an `[adapters.file]` table.
    #[must_use]
    pub fn config(mut self, config: AdapterConfig) -> Self {
        self.config = config;
        self
    }

    /// Sub-builder consumes self, so there must be a way back to chain more adapters.
    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent
            .adapters
            .push((self.name, PendingAdapter::File, self.config));
        self.parent
    }
}
