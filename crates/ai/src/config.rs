//! Settings for the text-generation backend.
//!
//! Environment variables:
//! - `GEMINI_API_KEY`: credential (optional; without it every analysis
//!   returns the fallback text)
//! - `NEXGEN_AI_MODEL`: model name (default: gemini-3-flash-preview)
//! - `NEXGEN_AI_BASE_URL`: API root (default: https://generativelanguage.googleapis.com)
//! - `NEXGEN_REPORT_LANGUAGE`: language the report is requested in
//!   (default: Traditional Chinese)

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_REPORT_LANGUAGE: &str = "Traditional Chinese";

#[derive(Clone)]
pub struct AiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub report_language: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            report_language: DEFAULT_REPORT_LANGUAGE.to_string(),
        }
    }
}

impl AiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            api_key: get("GEMINI_API_KEY"),
            model: get("NEXGEN_AI_MODEL").unwrap_or(defaults.model),
            base_url: get("NEXGEN_AI_BASE_URL").unwrap_or(defaults.base_url),
            report_language: get("NEXGEN_REPORT_LANGUAGE").unwrap_or(defaults.report_language),
        }
    }
}

// Keep the credential out of logs.
impl core::fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("report_language", &self.report_language)
            .finish()
    }
}
