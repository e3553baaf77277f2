use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};
use crate::i18n::Language;
use crate::models::SearchResult;

/// Body of `POST /chat`
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    pub language: &'a str,
}

/// Reply of `POST /chat`. The response text may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub response: Option<String>,
}

/// Reply of `POST /analyze`. Every field is optional on the wire; missing
/// fields default to empty values downstream.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeReply {
    #[serde(default)]
    pub extracted_text: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub key_findings: Option<Vec<String>>,
    #[serde(default)]
    pub recommendations: Option<Vec<String>>,
    #[serde(default)]
    pub next_steps: Option<Vec<String>>,
}

/// Reply of `GET /research`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResearchReply {
    #[serde(default)]
    pub results: Option<Vec<SearchResult>>,
}

/// A document submitted for analysis: binary image or PDF.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Remote backend contract consumed by the orchestrator. One request-response
/// round trip per call, no retry.
#[async_trait]
pub trait BackendApi: Send + Sync {
    async fn chat(&self, message: &str, language: Language) -> Result<ChatReply>;
    async fn analyze(&self, document: DocumentUpload) -> Result<AnalyzeReply>;
    async fn research(&self, query: &str, language: Language) -> Result<ResearchReply>;
}

/// HTTP implementation of [`BackendApi`] over a shared reqwest client.
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl BackendApi for HttpBackend {
    async fn chat(&self, message: &str, language: Language) -> Result<ChatReply> {
        let url = format!("{}/chat", self.base_url);
        let request = ChatRequest {
            message,
            language: language.as_str(),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ClientError::RemoteCall(format!("chat request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ClientError::RemoteCall(format!(
                "chat request returned {}",
                response.status()
            )));
        }

        response
            .json::<ChatReply>()
            .await
            .map_err(|e| ClientError::RemoteCall(format!("malformed chat response: {}", e)))
    }

    async fn analyze(&self, document: DocumentUpload) -> Result<AnalyzeReply> {
        let url = format!("{}/analyze", self.base_url);

        let part = reqwest::multipart::Part::bytes(document.bytes)
            .file_name(document.file_name)
            .mime_str(&document.content_type)
            .map_err(|e| ClientError::RemoteCall(format!("invalid document payload: {}", e)))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::RemoteCall(format!("analyze request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ClientError::RemoteCall(format!(
                "analyze request returned {}",
                response.status()
            )));
        }

        response
            .json::<AnalyzeReply>()
            .await
            .map_err(|e| ClientError::RemoteCall(format!("malformed analyze response: {}", e)))
    }

    async fn research(&self, query: &str, language: Language) -> Result<ResearchReply> {
        let url = format!(
            "{}/research?q={}&lang={}",
            self.base_url,
            urlencoding::encode(query),
            language.as_str()
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::RemoteCall(format!("research request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ClientError::RemoteCall(format!(
                "research request returned {}",
                response.status()
            )));
        }

        response
            .json::<ResearchReply>()
            .await
            .map_err(|e| ClientError::RemoteCall(format!("malformed research response: {}", e)))
    }
}
