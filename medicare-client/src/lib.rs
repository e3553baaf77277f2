pub mod backend;
pub mod clipboard;
pub mod error;
pub mod i18n;
pub mod models;
pub mod orchestrator;
pub mod store;
pub mod toast;

// Re-export commonly used types
pub use backend::{AnalyzeReply, BackendApi, ChatReply, DocumentUpload, HttpBackend, ResearchReply};
pub use clipboard::{ClipboardGateway, ClipboardSink, SystemClipboard};
pub use error::{ClientError, Result};
pub use i18n::{Language, LocalizedStrings, resolve};
pub use models::{
    AnalysisResult, Message, Role, SearchResult, SectionKey, SessionState, ToastKind, ToastState,
    View,
};
pub use orchestrator::Orchestrator;
pub use store::SessionStore;
pub use toast::{TOAST_DISMISS_AFTER, ToastNotifier};
