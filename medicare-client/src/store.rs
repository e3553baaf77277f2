use std::sync::Mutex;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::i18n::Language;
use crate::models::{
    AnalysisResult, Message, SearchResult, SectionKey, SessionState, ToastKind, View,
};

/// Single source of truth for one interactive session.
///
/// State lives behind a mutex; every mutation publishes a full snapshot on a
/// watch channel so presentation code can re-render. Subscribers observe,
/// they never own: dropping a receiver has no effect on the store, and the
/// store's lifetime is tied to whoever constructed it — there is no
/// process-wide singleton.
pub struct SessionStore {
    state: Mutex<SessionState>,
    changes: watch::Sender<SessionState>,
}

impl SessionStore {
    pub fn new() -> Self {
        let state = SessionState::default();
        let (changes, _) = watch::channel(state.clone());
        Self {
            state: Mutex::new(state),
            changes,
        }
    }

    /// Read-only snapshot of the current state.
    pub fn snapshot(&self) -> SessionState {
        self.state.lock().unwrap().clone()
    }

    /// Subscribe to state changes. Each mutation publishes one snapshot.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.changes.subscribe()
    }

    pub fn language(&self) -> Language {
        self.state.lock().unwrap().language
    }

    /// Apply one atomic mutation and notify subscribers.
    fn mutate<R>(&self, apply: impl FnOnce(&mut SessionState) -> R) -> R {
        let mut state = self.state.lock().unwrap();
        let result = apply(&mut state);
        self.changes.send_replace(state.clone());
        result
    }

    pub fn set_view(&self, view: View) {
        self.mutate(|state| state.view = view);
    }

    pub fn set_language(&self, language: Language) {
        self.mutate(|state| state.language = language);
    }

    /// Append a message to the conversation log. The log is never reordered
    /// or truncated.
    pub fn push_message(&self, message: Message) {
        self.mutate(|state| state.messages.push(message));
    }

    pub fn set_busy(&self, busy: bool) {
        self.mutate(|state| state.busy = busy);
    }

    /// Replace extracted text and analysis wholesale. No merging with any
    /// prior result.
    pub fn apply_analysis(&self, extracted_text: String, analysis: AnalysisResult) {
        self.mutate(|state| {
            state.extracted_text = Some(extracted_text);
            state.analysis = Some(analysis);
        });
    }

    /// Replace the search result sequence wholesale.
    pub fn set_search_results(&self, results: Vec<SearchResult>) {
        self.mutate(|state| state.search_results = results);
    }

    pub fn toggle_section(&self, section: SectionKey) {
        self.mutate(|state| state.sections.toggle(section));
    }

    pub fn show_toast(&self, message: String, kind: ToastKind, expires_at: DateTime<Utc>) {
        self.mutate(|state| {
            state.toast.visible = true;
            state.toast.message = message;
            state.toast.kind = kind;
            state.toast.expires_at = Some(expires_at);
        });
    }

    pub fn clear_toast(&self) {
        self.mutate(|state| {
            state.toast.visible = false;
            state.toast.expires_at = None;
        });
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
