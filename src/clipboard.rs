// src/clipboard.rs
//! Access to the system clipboard.
//!
//! The platform clipboard is only compiled in with the `clipboard` cargo
//! feature. Without it every copy attempt reports [`ClipboardError::Unsupported`]
//! and the caller decides how loudly to complain.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard support was not compiled in (rebuild with --features clipboard)")]
    Unsupported,

    #[error("Clipboard init error: {0}")]
    Unavailable(String),

    #[error("Clipboard set error: {0}")]
    WriteFailed(String),
}

/// Something that can receive the generated password.
pub trait Clipboard {
    fn set_contents(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The desktop clipboard. Opened lazily on the first write.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        SystemClipboard
    }
}

#[cfg(feature = "clipboard")]
impl Clipboard for SystemClipboard {
    fn set_contents(&mut self, text: &str) -> Result<(), ClipboardError> {
        use ::clipboard::{ClipboardContext, ClipboardProvider};

        let mut ctx: ClipboardContext = ClipboardProvider::new()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        ctx.set_contents(text.to_string())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

#[cfg(not(feature = "clipboard"))]
impl Clipboard for SystemClipboard {
    fn set_contents(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unsupported)
    }
}

/// Copy `text` once. Failures are returned, never retried.
pub fn copy_to_clipboard<C: Clipboard + ?Sized>(
    clipboard: &mut C,
    text: &str,
) -> Result<(), ClipboardError> {
    match clipboard.set_contents(text) {
        Ok(()) => {
            log::info!("Copied password to clipboard");
            Ok(())
        }
        Err(e) => {
            log::warn!("Clipboard copy failed: {}", e);
            Err(e)
        }
    }
}
