//! Process-wide logger for code that doesn't want to thread a `Logger` around.
//!
//! The first use lazily creates a stdout logger with default settings; [`init`] installs
//! a custom one instead, but only before anything else has touched the global.

use crate::adapter::{Adapter, AdapterConfig};
use crate::clock::Clock;
use crate::fmt::Arg;
use crate::http::ResponseWriter;
use crate::logger::Logger;

use ::http::StatusCode;
use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Installs `logger` as the global instance.
///
/// # Errors
/// Hands `logger` back if the global was already initialised.
pub fn init(logger: Logger) -> Result<(), Logger> {
    LOGGER.set(logger)
}

pub fn logger() -> &'static Logger {
    LOGGER.get_or_init(Logger::default)
}

pub fn println(args: &[Arg]) {
    logger().println(args);
}

pub fn printf(format: &str, args: &[Arg]) {
    logger().printf(format, args);
}

pub fn errorln(args: &[Arg]) {
    logger().errorln(args);
}

pub fn errorf(format: &str, args: &[Arg]) {
    logger().errorf(format, args);
}

pub fn warningln(args: &[Arg]) {
    logger().warningln(args);
}

pub fn warningf(format: &str, args: &[Arg]) {
    logger().warningf(format, args);
}

#[track_caller]
pub fn debugln(args: &[Arg]) {
    logger().debugln(args);
}

#[track_caller]
pub fn debugf(format: &str, args: &[Arg]) {
    logger().debugf(format, args);
}

pub fn add_adapter(
    name: impl Into<String>,
    adapter: impl Adapter + 'static,
    config: AdapterConfig,
) {
    logger().add_adapter(name, adapter, config);
}

pub fn set_adapter_config(name: &str, config: AdapterConfig) -> bool {
    logger().set_adapter_config(name, config)
}

pub fn remove_adapter(name: &str) -> bool {
    logger().remove_adapter(name)
}

pub fn set_debug_mode(enabled: bool) {
    logger().set_debug_mode(enabled);
}

/// # Errors
/// Returns `Error::InvalidTimeFormat` and keeps the old layout if `layout` is invalid.
pub fn set_time_format(layout: impl Into<String>) -> Result<(), crate::Error> {
    logger().set_time_format(layout)
}

pub fn set_max_line_size(size: usize) {
    logger().set_max_line_size(size);
}

pub fn set_clock(clock: impl Clock + 'static) {
    logger().set_clock(clock);
}

/// # Errors
/// Failures writing the response body.
pub fn http_error<W>(w: &mut W, status: StatusCode) -> Result<(), crate::Error>
where
    W: ResponseWriter + ?Sized,
{
    logger().http_error(w, status)
}
