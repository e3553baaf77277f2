use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};
use crate::models::SectionKey;

/// Supported interface languages. Closed set: anything else is rejected at
/// the parsing boundary and callers fall back to English.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    /// Parse a language tag.
    ///
    /// Returns `UnsupportedLanguage` for tags outside the supported set;
    /// callers should default to `Language::En` rather than surface it.
    pub fn parse(tag: &str) -> Result<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "fr" => Ok(Language::Fr),
            other => Err(ClientError::UnsupportedLanguage(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    /// The other supported language, used by the language toggle.
    pub fn toggled(&self) -> Self {
        match self {
            Language::En => Language::Fr,
            Language::Fr => Language::En,
        }
    }
}

/// Every literal string shown anywhere in the interface. One struct for all
/// languages, so the key set cannot diverge between them.
#[derive(Debug, Serialize)]
pub struct LocalizedStrings {
    pub app_name: &'static str,
    pub tagline: &'static str,
    pub welcome: &'static str,
    pub chat: &'static str,
    pub analysis: &'static str,
    pub research: &'static str,
    pub get_started: &'static str,
    pub disclaimer: &'static str,
    pub features_title: &'static str,
    pub feature_chat: &'static str,
    pub feature_chat_desc: &'static str,
    pub feature_analysis: &'static str,
    pub feature_analysis_desc: &'static str,
    pub feature_research: &'static str,
    pub feature_research_desc: &'static str,
    pub chat_placeholder: &'static str,
    pub suggested_questions: &'static [&'static str],
    pub upload_text: &'static str,
    pub capture_text: &'static str,
    pub extracted_text: &'static str,
    pub analysis_results: &'static str,
    pub summary: &'static str,
    pub key_findings: &'static str,
    pub recommendations: &'static str,
    pub next_steps: &'static str,
    pub search_placeholder: &'static str,
    pub research_topics: &'static [&'static str],
    pub copy_success: &'static str,
    pub error_occurred: &'static str,
    pub loading: &'static str,
    pub ai_summary: &'static str,
}

impl LocalizedStrings {
    /// Title of a collapsible analysis section.
    pub fn section_title(&self, section: SectionKey) -> &'static str {
        match section {
            SectionKey::Summary => self.summary,
            SectionKey::KeyFindings => self.key_findings,
            SectionKey::Recommendations => self.recommendations,
            SectionKey::NextSteps => self.next_steps,
        }
    }
}

static EN: LocalizedStrings = LocalizedStrings {
    app_name: "Medicare AI",
    tagline: "Your Intelligent Medical Assistant",
    welcome: "Welcome",
    chat: "Chat",
    analysis: "Analysis",
    research: "Research",
    get_started: "Get Started",
    disclaimer: "⚠️ For informational purposes only - Always consult healthcare professionals",
    features_title: "Powerful Features for Your Health",
    feature_chat: "AI Chat Assistant",
    feature_chat_desc: "Get instant answers to your medical questions",
    feature_analysis: "Document Analysis",
    feature_analysis_desc: "Upload lab reports and medical documents",
    feature_research: "Medical Research",
    feature_research_desc: "Access verified medical information",
    chat_placeholder: "Ask a medical question...",
    suggested_questions: &[
        "Symptoms of malaria?",
        "What causes headaches?",
        "Diabetes management tips",
    ],
    upload_text: "Drag & drop files or click to upload",
    capture_text: "Capture with Camera",
    extracted_text: "Extracted Text",
    analysis_results: "Analysis Results",
    summary: "Summary",
    key_findings: "Key Findings",
    recommendations: "Recommendations",
    next_steps: "Next Steps",
    search_placeholder: "Search medical topics...",
    research_topics: &[
        "Diabetes guidelines",
        "Hypertension treatment",
        "Malaria prevention",
    ],
    copy_success: "Copied to clipboard!",
    error_occurred: "An error occurred. Please try again.",
    loading: "Processing...",
    ai_summary: "AI-Generated Summary",
};

static FR: LocalizedStrings = LocalizedStrings {
    app_name: "Medicare AI",
    tagline: "Votre Assistant Médical Intelligent",
    welcome: "Accueil",
    chat: "Discussion",
    analysis: "Analyse",
    research: "Recherche",
    get_started: "Commencer",
    disclaimer: "⚠️ À titre informatif uniquement - Consultez toujours des professionnels de santé",
    features_title: "Fonctionnalités Puissantes pour Votre Santé",
    feature_chat: "Assistant Chat IA",
    feature_chat_desc: "Obtenez des réponses instantanées à vos questions médicales",
    feature_analysis: "Analyse de Documents",
    feature_analysis_desc: "Téléchargez des rapports de laboratoire et documents médicaux",
    feature_research: "Recherche Médicale",
    feature_research_desc: "Accédez à des informations médicales vérifiées",
    chat_placeholder: "Posez une question médicale...",
    suggested_questions: &[
        "Symptômes du paludisme?",
        "Qu'est-ce qui cause les maux de tête?",
        "Conseils de gestion du diabète",
    ],
    upload_text: "Glissez-déposez des fichiers ou cliquez pour télécharger",
    capture_text: "Capturer avec la Caméra",
    extracted_text: "Texte Extrait",
    analysis_results: "Résultats de l'Analyse",
    summary: "Résumé",
    key_findings: "Principales Conclusions",
    recommendations: "Recommandations",
    next_steps: "Prochaines Étapes",
    search_placeholder: "Rechercher des sujets médicaux...",
    research_topics: &[
        "Directives sur le diabète",
        "Traitement de l'hypertension",
        "Prévention du paludisme",
    ],
    copy_success: "Copié dans le presse-papiers!",
    error_occurred: "Une erreur s'est produite. Veuillez réessayer.",
    loading: "Traitement en cours...",
    ai_summary: "Résumé Généré par IA",
};

/// Look up the string table for a language. Pure and total.
pub fn resolve(language: Language) -> &'static LocalizedStrings {
    match language {
        Language::En => &EN,
        Language::Fr => &FR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn key_set(strings: &LocalizedStrings) -> BTreeSet<String> {
        let value = serde_json::to_value(strings).unwrap();
        value
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect()
    }

    #[test]
    fn all_languages_expose_identical_key_sets() {
        assert_eq!(key_set(resolve(Language::En)), key_set(resolve(Language::Fr)));
    }

    #[test]
    fn no_language_has_empty_strings() {
        for language in [Language::En, Language::Fr] {
            let value = serde_json::to_value(resolve(language)).unwrap();
            for (key, entry) in value.as_object().unwrap() {
                match entry {
                    serde_json::Value::String(s) => {
                        assert!(!s.is_empty(), "{key} is empty for {language:?}")
                    }
                    serde_json::Value::Array(items) => {
                        assert!(!items.is_empty(), "{key} is empty for {language:?}")
                    }
                    other => panic!("unexpected value for {key}: {other:?}"),
                }
            }
        }
    }

    #[test]
    fn parse_rejects_unsupported_tags() {
        assert_eq!(Language::parse("en").unwrap(), Language::En);
        assert_eq!(Language::parse("FR").unwrap(), Language::Fr);
        assert!(matches!(
            Language::parse("de"),
            Err(crate::error::ClientError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn toggle_alternates_between_languages() {
        assert_eq!(Language::En.toggled(), Language::Fr);
        assert_eq!(Language::Fr.toggled(), Language::En);
    }
}
