use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::EnrichConfig;

/// Metadata generated for a new catalog entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratedMetadata {
    pub description: String,
    pub tags: Vec<String>,
}

/// The enrichment capability as seen by the mutation path.
///
/// `Disabled` stands in when no credential is configured; generation then
/// reports no metadata and callers substitute their fallback text.
pub enum Enricher {
    Remote(EnrichClient),
    Disabled,
    /// Test double returning a fixed result without touching the network.
    #[cfg(any(test, feature = "test-helpers"))]
    Fixed(Option<GeneratedMetadata>),
}

impl Enricher {
    /// Build from config. A disabled section or a missing API key yields
    /// `Disabled` rather than an error.
    pub fn from_config(config: &EnrichConfig) -> Self {
        if !config.enabled {
            tracing::info!("Enrichment disabled by config");
            return Self::Disabled;
        }
        if config.api_key.is_empty() {
            tracing::warn!(
                "No enrichment API key configured; new entries will use fallback descriptions"
            );
            return Self::Disabled;
        }
        Self::Remote(EnrichClient::new(config.clone()))
    }

    /// Generate a description and tags for a new entry, or `None` when
    /// enrichment is unavailable or fails. Never raises.
    pub async fn generate(&self, title: &str, url: &str) -> Option<GeneratedMetadata> {
        match self {
            Self::Remote(client) => client.generate(title, url).await,
            Self::Disabled => None,
            #[cfg(any(test, feature = "test-helpers"))]
            Self::Fixed(result) => result.clone(),
        }
    }
}

/// HTTP client for the generative-language API.
pub struct EnrichClient {
    config: EnrichConfig,
    client: reqwest::Client,
}

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
    #[serde(rename = "responseSchema")]
    response_schema: serde_json::Value,
}

/// Partial API response; only the fields the adapter reads.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl EnrichClient {
    pub fn new(config: EnrichConfig) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("playshelf-enrich/0.1")
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");
        Self { config, client }
    }

    /// One-shot generation call. No retries, no caching; any transport or
    /// schema failure is logged and collapsed to `None`.
    pub async fn generate(&self, title: &str, url: &str) -> Option<GeneratedMetadata> {
        let request_url = format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        );
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(title, url),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        };

        let resp = match self
            .client
            .post(&request_url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(error = %e, "Enrichment request failed");
                return None;
            },
        };

        if !resp.status().is_success() {
            tracing::warn!(status = %resp.status(), "Enrichment API returned error status");
            return None;
        }

        let body: GenerateResponse = match resp.json().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to decode enrichment response");
                return None;
            },
        };

        extract_metadata(&body)
    }
}

fn build_prompt(title: &str, url: &str) -> String {
    format!(
        "I have a web-based game titled \"{title}\" located at \"{url}\". \
         Please generate a short, engaging description (max 25 words) for a \
         gallery card. Also, suggest 3-4 relevant genre tags."
    )
}

/// Two-field object schema the model is constrained to.
fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "description": { "type": "STRING" },
            "tags": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["description", "tags"]
    })
}

/// Pull the first candidate's text part and parse it as metadata.
fn extract_metadata(body: &GenerateResponse) -> Option<GeneratedMetadata> {
    let text = body
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.as_str())?;
    parse_metadata(text)
}

/// Parse the model's JSON text, rejecting anything that does not match the
/// two-field schema or arrives with empty fields.
fn parse_metadata(text: &str) -> Option<GeneratedMetadata> {
    match serde_json::from_str::<GeneratedMetadata>(text) {
        Ok(meta) if !meta.description.is_empty() && !meta.tags.is_empty() => Some(meta),
        Ok(_) => {
            tracing::warn!("Enrichment response had an empty description or tag list");
            None
        },
        Err(e) => {
            tracing::warn!(error = %e, "Enrichment response text was not valid metadata");
            None
        },
    }
}
