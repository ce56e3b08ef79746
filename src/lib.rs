//! `conlog` - Colored, leveled console logging with pluggable output adapters.
//!
//! Every call renders one line `<color><timestamp> [<tag>] <body><reset>` to the console
//! sink and hands the unrendered arguments to each registered adapter:
//! - Four severities (message, error, warning, debug), each as a line call (arguments
//!   joined by spaces, newline-terminated) or a formatted call (printf-style, no newline)
//! - Debug calls carry the caller's `file:line` and are dropped unless debug mode is on
//! - Runtime-adjustable timestamp layout and maximum line length
//! - Named adapters with per-adapter configuration, added and removed at runtime
//! - An HTTP helper that logs an error and writes a JSON error body
//!
//! # Example
//!
//! ```
//! use conlog::{Arg, BufferOutput, FixedClock, Logger};
//!
//! let console = BufferOutput::new();
//! let logger = Logger::builder()
//!     .clock(FixedClock::from_unix(0))
//!     .output(console.clone())
//!     .build();
//!
//! logger.println(&["server".into(), "started".into()]);
//! logger.warningf("%d%% disk used", &[Arg::from(93)]);
//!
//! assert!(console.contents().contains("[msg] server started"));
//! assert!(console.contents().contains("[warning] 93% disk used"));
//! ```
//!
//! The [`global`] module offers the same calls on a lazily created process-wide logger.

// Core modules (always available)
pub mod adapter;
pub mod clock;
pub mod config;
pub mod fmt;
pub mod global;
pub mod http;
pub mod internal;
pub mod logger;
pub mod output;
pub mod severity;

mod error;

// Re-exports for convenience
pub use ::http::StatusCode;
pub use adapter::{Adapter, AdapterConfig, AdapterRegistry, FileAdapter, LogRecord};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Config, Settings};
pub use crate::http::ResponseWriter;
pub use error::Error;
pub use fmt::{Arg, Color};
pub use logger::{Logger, LoggerBuilder};
pub use output::{BufferOutput, ConsoleOutput, Output, WriterOutput};
pub use severity::{OutputKind, Severity};
