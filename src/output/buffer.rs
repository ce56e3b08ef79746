//! In-memory sink. Clones share one buffer, so a test can hand a clone to the logger
//! and read back exactly the bytes the logger produced.

use super::Output;
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct BufferOutput {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl BufferOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }

    /// Drains the buffer, returning what it held.
    #[must_use]
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.buf.lock());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.lock().is_empty()
    }
}

impl Output for BufferOutput {
    fn write(&self, rendered: &str) -> Result<(), crate::Error> {
        self.buf.lock().extend_from_slice(rendered.as_bytes());
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
