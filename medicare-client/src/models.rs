use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single entry in the conversation log. Append-only; insertion order
/// equals timestamp order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Structured outcome of a document analysis. Replaces any prior result
/// wholesale; fields the backend omitted are empty, not missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub summary: String,
    pub key_findings: Vec<String>,
    pub recommendations: Vec<String>,
    pub next_steps: Vec<String>,
}

/// One research search hit. At most the first result of a reply carries
/// `ai_summary`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub ai_summary: Option<String>,
}

/// The view the user is currently on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Welcome,
    Chat,
    Analysis,
    Research,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

/// The single transient notification slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastState {
    pub visible: bool,
    pub message: String,
    pub kind: ToastKind,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Collapsible sections of the analysis result panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKey {
    Summary,
    KeyFindings,
    Recommendations,
    NextSteps,
}

impl SectionKey {
    pub const ALL: [SectionKey; 4] = [
        SectionKey::Summary,
        SectionKey::KeyFindings,
        SectionKey::Recommendations,
        SectionKey::NextSteps,
    ];
}

/// Per-section expansion flags, all expanded initially
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionExpansion {
    pub summary: bool,
    pub key_findings: bool,
    pub recommendations: bool,
    pub next_steps: bool,
}

impl Default for SectionExpansion {
    fn default() -> Self {
        Self {
            summary: true,
            key_findings: true,
            recommendations: true,
            next_steps: true,
        }
    }
}

impl SectionExpansion {
    pub fn is_expanded(&self, section: SectionKey) -> bool {
        match section {
            SectionKey::Summary => self.summary,
            SectionKey::KeyFindings => self.key_findings,
            SectionKey::Recommendations => self.recommendations,
            SectionKey::NextSteps => self.next_steps,
        }
    }

    pub fn toggle(&mut self, section: SectionKey) {
        let flag = match section {
            SectionKey::Summary => &mut self.summary,
            SectionKey::KeyFindings => &mut self.key_findings,
            SectionKey::Recommendations => &mut self.recommendations,
            SectionKey::NextSteps => &mut self.next_steps,
        };
        *flag = !*flag;
    }
}

/// The full in-memory state of one interactive session. Not persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub view: View,
    pub language: crate::i18n::Language,
    pub messages: Vec<Message>,
    pub extracted_text: Option<String>,
    pub analysis: Option<AnalysisResult>,
    pub search_results: Vec<SearchResult>,
    pub toast: ToastState,
    pub sections: SectionExpansion,
    pub busy: bool,
}
