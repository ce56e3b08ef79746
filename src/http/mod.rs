//! Error responses for HTTP handlers: one call logs the failure and answers the client
//! with a small JSON envelope.
//!
//! The body is always
//!
//! ```text
//! {
//! 	"error": "<reason phrase>",
//! 	"status": "error"
//! }
//! ```
//!
//! tab-indented and newline-terminated.

use crate::fmt::Arg;
use crate::logger::Logger;

use ::http::{Response, StatusCode};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// The two things the helper needs from a response.
pub trait ResponseWriter {
    fn set_status(&mut self, status: StatusCode);

    /// # Errors
    /// Transport errors writing the body.
    fn write_body(&mut self, body: &[u8]) -> Result<(), crate::Error>;
}

/// Buffered responses, as built by handlers that return `Response<Vec<u8>>`.
impl ResponseWriter for Response<Vec<u8>> {
    fn set_status(&mut self, status: StatusCode) {
        *self.status_mut() = status;
    }

    fn write_body(&mut self, body: &[u8]) -> Result<(), crate::Error> {
        self.body_mut().extend_from_slice(body);
        Ok(())
    }
}

/// Field order is part of the wire format.
#[derive(Debug, Serialize)]
struct ErrorEnvelope<'a> {
    error: &'a str,
    status: &'static str,
}

/// Standard reason phrase, empty for codes without one.
#[must_use]
pub fn reason_phrase(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("")
}

/// Serializes the envelope for `reason`.
///
/// # Errors
/// Serialization errors (not expected for string fields).
pub fn error_body(reason: &str) -> Result<Vec<u8>, crate::Error> {
    let envelope = ErrorEnvelope {
        error: reason,
        status: "error",
    };

    let mut body = Vec::new();
    let mut ser = Serializer::with_formatter(&mut body, PrettyFormatter::with_indent(b"\t"));
    envelope.serialize(&mut ser)?;
    body.push(b'\n');
    Ok(body)
}

impl Logger {
    /// Logs the reason phrase as an error line, then sets `status` and writes the JSON
    /// envelope to `w`.
    ///
    /// # Errors
    /// Failures writing the body are returned to the handler; the log line has already
    /// been emitted by then.
    pub fn http_error<W>(&self, w: &mut W, status: StatusCode) -> Result<(), crate::Error>
    where
        W: ResponseWriter + ?Sized,
    {
        let reason = reason_phrase(status);
        self.errorln(&[Arg::from(reason)]);

        w.set_status(status);
        w.write_body(&error_body(reason)?)
    }
}
