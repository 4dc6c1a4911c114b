//! Gemini provider implementation.
//!
//! Text generation against Google's Gemini `generateContent` API.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Gemini API base URL.
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini provider configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
}

/// Gemini text provider.
pub struct GeminiTextProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiTextProvider {
    pub fn new(config: GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn api_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            GEMINI_API_BASE, self.config.model, self.config.api_key
        )
    }
}

#[async_trait]
impl TextProvider for GeminiTextProvider {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, ProviderError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![ContentPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(self.api_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError(format!(
                "Gemini API error {}: {}",
                status, error_text
            )));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ApiError(format!("Failed to parse response: {}", e)))?;

        // candidates[0].content.parts[0].text, with every hop optional.
        Ok(api_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text))
    }
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<ContentPart>,
}

#[derive(Debug, Serialize)]
struct ContentPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_parsing_extracts_first_candidate_text() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Paris is the capital"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text);
        assert_eq!(text.as_deref(), Some("Paris is the capital"));
    }

    #[test]
    fn response_parsing_tolerates_missing_fields() {
        for raw in [
            "{}",
            r#"{"candidates": []}"#,
            r#"{"candidates": [{}]}"#,
            r#"{"candidates": [{"content": {}}]}"#,
            r#"{"candidates": [{"content": {"parts": []}}]}"#,
            r#"{"candidates": [{"content": {"parts": [{}]}}]}"#,
        ] {
            let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
            let text = response
                .candidates
                .into_iter()
                .next()
                .and_then(|c| c.content)
                .and_then(|c| c.parts.into_iter().next())
                .and_then(|p| p.text);
            assert_eq!(text, None, "raw: {raw}");
        }
    }
}
