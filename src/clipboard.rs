//! Clipboard access behind a trait so it can be mocked in tests

use anyhow::Result;

/// Trait for clipboard operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardProvider {
    /// Replace the clipboard contents with `text`
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard backed by arboard
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
