//! Clipboard port
//!
//! The share action hands the raw document text to this collaborator. A
//! rejected write (the browser permission prompt, a headless environment)
//! is `ClipboardDenied`; the caller reports it and changes no state.

use crate::error::Error;

/// External clipboard the share action writes into
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), Error>;
}

/// Clipboard that retains the last written text, for tests and headless use
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    last: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently written text, if any
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), Error> {
        self.last = Some(text.to_string());
        Ok(())
    }
}

/// Clipboard that rejects every write
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct DenyingClipboard;

#[cfg(test)]
impl Clipboard for DenyingClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), Error> {
        Err(Error::ClipboardDenied)
    }
}
