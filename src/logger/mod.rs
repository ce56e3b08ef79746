//! The dispatcher: eight entry points (message, error, warning, debug; each as a line or
//! a formatted call) that render to the console sink and fan the raw record out to every
//! registered adapter.
//!
//! All state is interior and lock-protected, so one `Logger` can be shared across threads
//! and reconfigured while other threads log.

mod builder;

pub use builder::{FileBuilder, LoggerBuilder};

use crate::adapter::{Adapter, AdapterConfig, AdapterRegistry, LogRecord};
use crate::clock::Clock;
use crate::config::{Config, Settings};
use crate::fmt::{Arg, layout, render};
use crate::internal;
use crate::output::Output;
use crate::severity::Severity;

use parking_lot::RwLock;
use std::panic::Location;
use std::sync::Arc;

pub struct Logger {
    /// Replaced wholesale on every change; each call renders against one snapshot.
    settings: RwLock<Arc<Settings>>,
    clock: RwLock<Arc<dyn Clock>>,
    console: Arc<dyn Output>,
    adapters: AdapterRegistry,
}

impl Default for Logger {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Stdout logger set up from a loaded config. An `[adapters.file]` table registers
    /// the built-in file adapter as `"file"`.
    ///
    /// # Errors
    /// Returns `Error::InvalidTimeFormat` if `[general].time_format` can't be rendered.
    pub fn from_config(config: &Config) -> Result<Self, crate::Error> {
        let mut builder = Self::builder().settings(config.settings()?);
        if let Some(file) = config.adapters.get("file") {
            builder = builder.file().config(file.clone()).done();
        }
        Ok(builder.build())
    }

    /// Swaps in the config's settings and hands each `[adapters.<name>]` table to the
    /// adapter of that name. Tables for unregistered names are skipped.
    ///
    /// # Errors
    /// Returns `Error::InvalidTimeFormat` if `[general].time_format` can't be rendered;
    /// nothing is changed in that case.
    pub fn apply_config(&self, config: &Config) -> Result<(), crate::Error> {
        self.set_settings(config.settings()?)?;
        for (name, adapter_config) in &config.adapters {
            if !self.set_adapter_config(name, adapter_config.clone()) {
                internal::debug("LOGGER", &format!("No adapter named {name}, config skipped"));
            }
        }
        Ok(())
    }

    /// Core dispatch. Debug records vanish unless debug mode is on; everything else is
    /// rendered once to the console sink, then handed unrendered to each adapter.
    /// Sink failures are swallowed; a log call never fails its caller.
    pub fn log(&self, record: &LogRecord<'_>) {
        let settings = self.settings();
        if record.severity == Severity::Debug && !settings.debug_mode {
            return;
        }

        let now = self.clock.read().now();
        let rendered = render(record, &settings, &now);
        let _ = self.console.write(&rendered);

        for (adapter, config) in self.adapters.snapshot() {
            adapter.handle(record, &config);
        }
    }

    /// What a call would print, without printing it. `None` when it would be suppressed.
    #[must_use]
    pub fn render(&self, record: &LogRecord<'_>) -> Option<String> {
        let settings = self.settings();
        if record.severity == Severity::Debug && !settings.debug_mode {
            return None;
        }
        let now = self.clock.read().now();
        Some(render(record, &settings, &now))
    }

    pub fn println(&self, args: &[Arg]) {
        self.log(&LogRecord::line(Severity::Message, args));
    }

    pub fn printf(&self, format: &str, args: &[Arg]) {
        self.log(&LogRecord::formatted(Severity::Message, format, args));
    }

    pub fn errorln(&self, args: &[Arg]) {
        self.log(&LogRecord::line(Severity::Error, args));
    }

    pub fn errorf(&self, format: &str, args: &[Arg]) {
        self.log(&LogRecord::formatted(Severity::Error, format, args));
    }

    pub fn warningln(&self, args: &[Arg]) {
        self.log(&LogRecord::line(Severity::Warning, args));
    }

    pub fn warningf(&self, format: &str, args: &[Arg]) {
        self.log(&LogRecord::formatted(Severity::Warning, format, args));
    }

    /// Tagged with the caller's file and line.
    #[track_caller]
    pub fn debugln(&self, args: &[Arg]) {
        self.log(&LogRecord::line(Severity::Debug, args).at(Location::caller()));
    }

    /// Tagged with the caller's file and line.
    #[track_caller]
    pub fn debugf(&self, format: &str, args: &[Arg]) {
        self.log(&LogRecord::formatted(Severity::Debug, format, args).at(Location::caller()));
    }

    /// Registers `adapter` under `name`, replacing any adapter already there.
    pub fn add_adapter(
        &self,
        name: impl Into<String>,
        adapter: impl Adapter + 'static,
        config: AdapterConfig,
    ) {
        self.adapters.add(name, Arc::new(adapter), config);
    }

    /// Replaces the named adapter's config. A no-op for names never added; returns
    /// whether an adapter was updated.
    pub fn set_adapter_config(&self, name: &str, config: AdapterConfig) -> bool {
        self.adapters.set_config(name, config)
    }

    /// A no-op for names never added; returns whether an adapter was removed.
    pub fn remove_adapter(&self, name: &str) -> bool {
        self.adapters.remove(name)
    }

    #[must_use]
    pub const fn adapters(&self) -> &AdapterRegistry {
        &self.adapters
    }

    /// Snapshot of the current formatting state.
    #[must_use]
    pub fn settings(&self) -> Arc<Settings> {
        Arc::clone(&self.settings.read())
    }

    /// # Errors
    /// Returns `Error::InvalidTimeFormat` and keeps the old settings if the layout is invalid.
    pub fn set_settings(&self, settings: Settings) -> Result<(), crate::Error> {
        settings.validate()?;
        *self.settings.write() = Arc::new(settings);
        Ok(())
    }

    fn update_settings(&self, f: impl FnOnce(&mut Settings)) {
        let mut guard = self.settings.write();
        f(Arc::make_mut(&mut guard));
    }

    #[must_use]
    pub fn debug_mode(&self) -> bool {
        self.settings.read().debug_mode
    }

    pub fn set_debug_mode(&self, enabled: bool) {
        self.update_settings(|s| s.debug_mode = enabled);
    }

    #[must_use]
    pub fn time_format(&self) -> String {
        self.settings.read().time_format.clone()
    }

    /// Takes effect from the next call on.
    ///
    /// # Errors
    /// Returns `Error::InvalidTimeFormat` and keeps the old layout if `layout` is invalid.
    pub fn set_time_format(&self, format: impl Into<String>) -> Result<(), crate::Error> {
        let format = format.into();
        layout::validate(&format)?;
        self.update_settings(|s| s.time_format = format);
        Ok(())
    }

    #[must_use]
    pub fn max_line_size(&self) -> usize {
        self.settings.read().max_line_size
    }

    /// 0 disables truncation.
    pub fn set_max_line_size(&self, size: usize) {
        self.update_settings(|s| s.max_line_size = size);
    }

    pub fn set_clock(&self, clock: impl Clock + 'static) {
        *self.clock.write() = Arc::new(clock);
    }

    #[must_use]
    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock.read())
    }

    /// # Errors
    /// I/O errors from the console sink.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.console.flush()
    }
}
