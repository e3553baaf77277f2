use std::sync::Arc;

use tracing::warn;

use crate::error::{ClientError, Result};
use crate::i18n;
use crate::models::ToastKind;
use crate::store::SessionStore;
use crate::toast::ToastNotifier;

/// Write access to a clipboard. Seam for tests and headless environments.
pub trait ClipboardSink: Send + Sync {
    fn set_text(&self, text: &str) -> Result<()>;
}

/// System clipboard backed by arboard.
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ClientError::ClipboardUnavailable(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClientError::ClipboardUnavailable(e.to_string()))
    }
}

/// Copies text to the clipboard and reports the outcome through the toast
/// notifier. A denied clipboard never propagates as a fault.
pub struct ClipboardGateway {
    sink: Box<dyn ClipboardSink>,
    store: Arc<SessionStore>,
    toasts: Arc<ToastNotifier>,
}

impl ClipboardGateway {
    pub fn new(
        sink: Box<dyn ClipboardSink>,
        store: Arc<SessionStore>,
        toasts: Arc<ToastNotifier>,
    ) -> Self {
        Self {
            sink,
            store,
            toasts,
        }
    }

    /// Gateway over the system clipboard.
    pub fn system(store: Arc<SessionStore>, toasts: Arc<ToastNotifier>) -> Self {
        Self::new(Box::new(SystemClipboard::new()), store, toasts)
    }

    pub fn copy(&self, text: &str) {
        let strings = i18n::resolve(self.store.language());
        match self.sink.set_text(text) {
            Ok(()) => self.toasts.show(strings.copy_success, ToastKind::Success),
            Err(e) => {
                warn!("Clipboard write failed: {}", e);
                self.toasts.show(strings.error_occurred, ToastKind::Error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingSink {
        writes: Mutex<Vec<String>>,
    }

    impl ClipboardSink for RecordingSink {
        fn set_text(&self, text: &str) -> Result<()> {
            self.writes.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    struct DeniedSink;

    impl ClipboardSink for DeniedSink {
        fn set_text(&self, _text: &str) -> Result<()> {
            Err(ClientError::ClipboardUnavailable("denied".to_string()))
        }
    }

    fn gateway(sink: Box<dyn ClipboardSink>) -> (Arc<SessionStore>, ClipboardGateway) {
        let store = Arc::new(SessionStore::new());
        let toasts = Arc::new(ToastNotifier::new(store.clone()));
        (store.clone(), ClipboardGateway::new(sink, store, toasts))
    }

    #[tokio::test]
    async fn successful_copy_shows_success_toast() {
        let sink = RecordingSink {
            writes: Mutex::new(Vec::new()),
        };
        let (store, gateway) = gateway(Box::new(sink));

        gateway.copy("BP 120/80");

        let toast = store.snapshot().toast;
        assert!(toast.visible);
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, "Copied to clipboard!");
    }

    #[tokio::test]
    async fn denied_clipboard_surfaces_error_toast() {
        let (store, gateway) = gateway(Box::new(DeniedSink));

        gateway.copy("anything");

        let toast = store.snapshot().toast;
        assert!(toast.visible);
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "An error occurred. Please try again.");
    }

    #[tokio::test]
    async fn toast_message_follows_active_language() {
        let sink = RecordingSink {
            writes: Mutex::new(Vec::new()),
        };
        let (store, gateway) = gateway(Box::new(sink));
        store.set_language(crate::i18n::Language::Fr);

        gateway.copy("texte");

        assert_eq!(
            store.snapshot().toast.message,
            "Copié dans le presse-papiers!"
        );
    }
}
