use serde::Deserialize;

/// Configuration for the metadata enrichment adapter.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnrichConfig {
    /// Master switch; when false the adapter is never consulted.
    pub enabled: bool,
    /// API key for the generative-language service.
    pub api_key: String,
    /// Model name, e.g. "gemini-2.5-flash".
    pub model: String,
    /// API base URL.
    pub endpoint: String,
    /// Request timeout in seconds; expiry counts as adapter failure.
    pub timeout_secs: u64,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: String::new(),
            model: "gemini-2.5-flash".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout_secs: 10,
        }
    }
}
