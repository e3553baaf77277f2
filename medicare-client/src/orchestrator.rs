use std::sync::Arc;

use tracing::{error, info};

use crate::backend::{BackendApi, DocumentUpload};
use crate::i18n;
use crate::models::{AnalysisResult, Message, ToastKind};
use crate::store::SessionStore;
use crate::toast::ToastNotifier;

/// Literal fallback when the backend replies without a response text.
const NO_RESPONSE_FALLBACK: &str = "No response received";

/// Coordinates the three request channels (chat, document analysis, research
/// search) against the remote backend.
///
/// Each operation runs Idle → Pending → {Success, Failure} → Idle: busy is
/// set synchronously on invocation (unless the empty-input guard fires) and
/// cleared exactly once when the call resolves. The busy flag is shared by
/// all three channels; if two requests are in flight, whichever resolves
/// first clears it for all. That is preserved legacy behavior, not an
/// accident. There is no mutual exclusion and no cancellation: a reply
/// arriving after the user navigated away is still applied to the store.
pub struct Orchestrator {
    store: Arc<SessionStore>,
    backend: Arc<dyn BackendApi>,
    toasts: Arc<ToastNotifier>,
}

impl Orchestrator {
    pub fn new(
        store: Arc<SessionStore>,
        backend: Arc<dyn BackendApi>,
        toasts: Arc<ToastNotifier>,
    ) -> Self {
        Self {
            store,
            backend,
            toasts,
        }
    }

    /// Send a chat message. No-op on empty trimmed input.
    ///
    /// The user message is appended before the remote call; on failure only
    /// an error toast follows it, never an assistant message.
    pub async fn send_chat_message(&self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        let language = self.store.language();
        self.store.push_message(Message::user(text));
        self.store.set_busy(true);

        match self.backend.chat(text, language).await {
            Ok(reply) => {
                let content = reply
                    .response
                    .unwrap_or_else(|| NO_RESPONSE_FALLBACK.to_string());
                self.store.push_message(Message::assistant(content));
                info!("Chat reply received");
            }
            Err(e) => {
                error!("Chat request failed: {}", e);
                self.toasts
                    .show(i18n::resolve(language).error_occurred, ToastKind::Error);
            }
        }

        self.store.set_busy(false);
    }

    /// Submit a document for extraction and analysis.
    ///
    /// On success the extracted text and analysis replace any prior values
    /// wholesale, with missing fields defaulting to empty. On failure the
    /// prior values stay untouched.
    pub async fn analyze_document(&self, document: DocumentUpload) {
        let language = self.store.language();
        info!("Analyzing document: {}", document.file_name);
        self.store.set_busy(true);

        match self.backend.analyze(document).await {
            Ok(reply) => {
                let analysis = AnalysisResult {
                    summary: reply.summary.unwrap_or_default(),
                    key_findings: reply.key_findings.unwrap_or_default(),
                    recommendations: reply.recommendations.unwrap_or_default(),
                    next_steps: reply.next_steps.unwrap_or_default(),
                };
                self.store
                    .apply_analysis(reply.extracted_text.unwrap_or_default(), analysis);
                info!("Document analysis applied");
            }
            Err(e) => {
                error!("Analyze request failed: {}", e);
                self.toasts
                    .show(i18n::resolve(language).error_occurred, ToastKind::Error);
            }
        }

        self.store.set_busy(false);
    }

    /// Run a research search. No-op on empty trimmed input.
    ///
    /// On success the result sequence is replaced wholesale, empty when the
    /// backend returned none. On failure prior results stay untouched.
    pub async fn search(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }

        let language = self.store.language();
        info!("Searching research index: {}", query);
        self.store.set_busy(true);

        match self.backend.research(query, language).await {
            Ok(reply) => {
                let results = reply.results.unwrap_or_default();
                info!("Search returned {} results", results.len());
                self.store.set_search_results(results);
            }
            Err(e) => {
                error!("Research request failed: {}", e);
                self.toasts
                    .show(i18n::resolve(language).error_occurred, ToastKind::Error);
            }
        }

        self.store.set_busy(false);
    }
}
