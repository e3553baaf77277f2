use thiserror::Error;

/// Errors surfaced by the client core
#[derive(Error, Debug)]
pub enum ClientError {
    /// Language tag outside the supported set; callers should fall back to English
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Network error or non-success response from the remote backend
    #[error("Remote call failed: {0}")]
    RemoteCall(String),

    /// Platform denied clipboard access
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
