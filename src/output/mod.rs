//! The console sink every rendered line is written to, regardless of registered adapters.
//! Stdout is the default; tests and embedders capture into a buffer or any `Write`.

mod buffer;
mod console;

pub use buffer::BufferOutput;
pub use console::{ConsoleOutput, WriterOutput};

/// `Send + Sync` bounds enable concurrent logging from multiple threads.
pub trait Output: Send + Sync {
    /// Writes one fully rendered line. Implementations must emit it with a single write
    /// under their own lock so concurrent lines never tear.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn write(&self, rendered: &str) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error>;
}
