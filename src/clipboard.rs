// Clipboard capability and the boolean-reporting copy helper
use std::cell::RefCell;

use wasm_bindgen_futures::JsFuture;

use crate::error::CapabilityError;

#[allow(async_fn_in_trait)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), CapabilityError>;
}

/// `navigator.clipboard`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), CapabilityError> {
        let window = web_sys::window().ok_or(CapabilityError::Unavailable("window"))?;
        let promise = window.navigator().clipboard().write_text(text);
        JsFuture::from(promise).await?;
        Ok(())
    }
}

/// Copy `text`, reporting only whether it worked. The cause is logged.
pub async fn copy(clipboard: &impl Clipboard, text: &str) -> bool {
    match clipboard.write_text(text).await {
        Ok(()) => true,
        Err(e) => {
            log::error!("clipboard write failed: {e}");
            false
        }
    }
}

/// Keeps what was written; refuses every write when `deny` is set.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub deny: bool,
    pub contents: RefCell<Option<String>>,
}

impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), CapabilityError> {
        if self.deny {
            return Err(CapabilityError::Js("NotAllowedError".into()));
        }
        *self.contents.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn copy_reports_success() {
        let clipboard = MemoryClipboard::default();
        assert!(block_on(copy(&clipboard, "sk-123")));
        assert_eq!(clipboard.contents.borrow().as_deref(), Some("sk-123"));
    }

    #[test]
    fn copy_degrades_failure_to_false() {
        let clipboard = MemoryClipboard {
            deny: true,
            ..Default::default()
        };
        assert!(!block_on(copy(&clipboard, "sk-123")));
        assert_eq!(*clipboard.contents.borrow(), None);
    }
}
