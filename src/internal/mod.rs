//! conlog's own diagnostic logger. Adapter write failures and config loading are
//! reported through the same formatting pipeline, on stderr.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if multiple entry
//! points race to call `init`. Nothing is reported until one of the `init` functions ran.

use crate::adapter::LogRecord;
use crate::config::Config;
use crate::fmt::Arg;
use crate::logger::Logger;
use crate::output::WriterOutput;
use crate::severity::Severity;
use std::io;
use std::panic::Location;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Initializes from the config file on disk.
pub fn init() {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| {
        let config = Config::load().unwrap_or_default();
        build_internal_logger(&config)
    });
    if !was_init {
        debug("INTERNAL", "Internal logger ready");
    }
}

/// Initializes from an already-loaded config.
pub fn init_with_config(config: &Config) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| build_internal_logger(config));
    if !was_init {
        debug(
            "INTERNAL",
            &format!(
                "Debug: {}, time format: {}",
                config.general.debug, config.general.time_format
            ),
        );
        debug("INTERNAL", "Internal logger ready");
    }
}

fn build_internal_logger(config: &Config) -> Logger {
    let builder = Logger::builder().output(WriterOutput::new(io::stderr()));
    match config.settings() {
        Ok(settings) => builder.settings(settings).build(),
        Err(_) => builder.debug_mode(config.general.debug).build(),
    }
}

/// No-op before `init`.
#[track_caller]
fn log(severity: Severity, scope: &str, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        let args = [Arg::from(format!("{scope}:")), Arg::from(msg)];
        logger.log(&LogRecord::line(severity, &args).at(Location::caller()));
    }
}

/// Visible only when the internal logger runs in debug mode.
#[track_caller]
pub fn debug(scope: &str, msg: &str) {
    log(Severity::Debug, scope, msg);
}

/// Failures the public API swallows, such as an adapter that can't write.
pub fn warning(scope: &str, msg: &str) {
    log(Severity::Warning, scope, msg);
}
