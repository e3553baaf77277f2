use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;

use crate::models::ToastKind;
use crate::store::SessionStore;

/// How long a toast stays visible before auto-dismissal.
pub const TOAST_DISMISS_AFTER: Duration = Duration::from_millis(3000);

/// Manages the single transient notification slot.
///
/// At most one dismissal task is pending at a time: a newer `show` aborts
/// the prior task and restarts the full window, so two toasts can never
/// interleave.
pub struct ToastNotifier {
    store: Arc<SessionStore>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl ToastNotifier {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self {
            store,
            pending: Mutex::new(None),
        }
    }

    /// Show a toast and schedule its dismissal. Supersedes any prior toast.
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        let message = message.into();
        let expires_at = Utc::now()
            + chrono::Duration::from_std(TOAST_DISMISS_AFTER).unwrap_or(chrono::Duration::zero());
        self.store.show_toast(message, kind, expires_at);

        let mut pending = self.pending.lock().unwrap();
        if let Some(prior) = pending.take() {
            prior.abort();
        }
        let store = self.store.clone();
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(TOAST_DISMISS_AFTER).await;
            store.clear_toast();
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn settle() {
        // Let the dismissal task observe its elapsed timer.
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn toast_dismisses_after_the_window() {
        let store = Arc::new(SessionStore::new());
        let toasts = ToastNotifier::new(store.clone());

        toasts.show("Copied to clipboard!", ToastKind::Success);
        let toast = store.snapshot().toast;
        assert!(toast.visible);
        assert_eq!(toast.message, "Copied to clipboard!");
        assert_eq!(toast.kind, ToastKind::Success);
        assert!(toast.expires_at.is_some());

        tokio::time::sleep(Duration::from_millis(2999)).await;
        settle().await;
        assert!(store.snapshot().toast.visible);

        tokio::time::sleep(Duration::from_millis(2)).await;
        settle().await;
        let toast = store.snapshot().toast;
        assert!(!toast.visible);
        assert!(toast.expires_at.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn newer_show_supersedes_and_restarts_the_timer() {
        let store = Arc::new(SessionStore::new());
        let toasts = ToastNotifier::new(store.clone());

        toasts.show("A", ToastKind::Success);
        tokio::time::sleep(Duration::from_millis(2000)).await;
        toasts.show("B", ToastKind::Error);

        // Past A's original deadline: A's timer was aborted, B is still up.
        tokio::time::sleep(Duration::from_millis(2000)).await;
        settle().await;
        let toast = store.snapshot().toast;
        assert!(toast.visible);
        assert_eq!(toast.message, "B");
        assert_eq!(toast.kind, ToastKind::Error);

        // B's own full window elapses.
        tokio::time::sleep(Duration::from_millis(1100)).await;
        settle().await;
        assert!(!store.snapshot().toast.visible);
    }
}
