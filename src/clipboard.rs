use thiserror::Error;

use crate::notify::Toast;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard is not available")]
    Unavailable,
    #[error("Clipboard write rejected: {0}")]
    Rejected(String),
}

/// Write-only text access to the system clipboard.
#[allow(async_fn_in_trait)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Copies `text` and describes the outcome as a toast.
///
/// `label` names what was copied ("Email", "Phone number", ...).
pub async fn copy_with_notice<C: Clipboard>(clipboard: &C, text: &str, label: &str) -> Toast {
    match clipboard.write_text(text).await {
        Ok(()) => Toast::new(
            format!("{label} copied!"),
            format!("{text} has been copied to your clipboard."),
        ),
        Err(e) => {
            log::warn!("copy of {label} failed: {e}");
            Toast::destructive(
                "Copy failed",
                "Unable to copy to clipboard. Please copy manually.",
            )
        }
    }
}

/// The browser's async clipboard. Outside the browser every write fails as unavailable.
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    #[cfg(feature = "hydrate")]
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        use wasm_bindgen_futures::JsFuture;

        let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
        let promise = window.navigator().clipboard().write_text(text);
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| ClipboardError::Rejected(format!("{e:?}")))
    }

    #[cfg(not(feature = "hydrate"))]
    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeClipboard {
        reject: bool,
        contents: RefCell<Option<String>>,
    }

    impl Clipboard for FakeClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            if self.reject {
                return Err(ClipboardError::Rejected("NotAllowedError".into()));
            }
            *self.contents.borrow_mut() = Some(text.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn success_names_what_was_copied() {
        let clip = FakeClipboard::default();
        let toast = copy_with_notice(&clip, "+91-7404662978", "Phone number").await;
        assert_eq!(toast.title, "Phone number copied!");
        assert_eq!(
            toast.description,
            "+91-7404662978 has been copied to your clipboard."
        );
        assert!(!toast.is_error());
        assert_eq!(clip.contents.borrow().as_deref(), Some("+91-7404662978"));
    }

    #[tokio::test]
    async fn rejection_asks_for_manual_copy() {
        let clip = FakeClipboard {
            reject: true,
            ..Default::default()
        };
        let toast = copy_with_notice(&clip, "someone@example.com", "Email").await;
        assert_eq!(toast.title, "Copy failed");
        assert_eq!(
            toast.description,
            "Unable to copy to clipboard. Please copy manually."
        );
        assert!(toast.is_error());
        assert!(clip.contents.borrow().is_none());
    }

    #[tokio::test]
    async fn no_browser_means_copy_failed() {
        let toast = copy_with_notice(&BrowserClipboard, "x", "Email").await;
        assert_eq!(toast.title, "Copy failed");
    }
}
