use async_trait::async_trait;
use canto_core::prompt::build_translation_prompt;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::GeminiConfig;
use crate::error::TranslationError;

/// Sends a prompt to a generative-text model.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Return the model's reply to `prompt`.
    ///
    /// # Errors
    ///
    /// Returns `TranslationError` when the request fails or the reply is empty.
    async fn generate(&self, prompt: &str) -> Result<String, TranslationError>;

    /// Translate an English transcript with the fixed prompt template.
    ///
    /// # Errors
    ///
    /// Returns `TranslationError` when the request fails or the reply is empty.
    async fn translate(
        &self,
        transcript: &str,
        alternative_count: u8,
    ) -> Result<String, TranslationError> {
        self.generate(&build_translation_prompt(transcript, alternative_count))
            .await
    }
}

/// Translation over the Gemini `generateContent` API.
#[derive(Clone)]
pub struct TranslationService {
    client: Client,
    config: GeminiConfig,
}

impl TranslationService {
    #[must_use]
    pub fn new(client: Client, config: GeminiConfig) -> Self {
        Self { client, config }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl Translator for TranslationService {
    async fn generate(&self, prompt: &str) -> Result<String, TranslationError> {
        debug!(model = %self.config.model, chars = prompt.len(), "requesting translation");
        let payload = GenerateRequest::new(prompt);

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "translation request rejected");
            return Err(TranslationError::HttpStatus(response.status()));
        }

        let body: GenerateResponse = response.json().await?;
        body.into_text()
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
}

impl GenerateRequest {
    fn new(prompt: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    fn into_text(self) -> Result<String, TranslationError> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(TranslationError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> Result<String, TranslationError> {
        serde_json::from_str::<GenerateResponse>(json)
            .unwrap()
            .into_text()
    }

    #[test]
    fn request_body_wraps_prompt_in_contents_parts() {
        let body = serde_json::to_value(GenerateRequest::new("hi")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"contents": [{"parts": [{"text": "hi"}]}]})
        );
    }

    #[test]
    fn first_candidate_first_part_wins() {
        let text = decode(
            r#"{"candidates": [
                {"content": {"parts": [{"text": "  ## Translation\n"}, {"text": "ignored"}]}},
                {"content": {"parts": [{"text": "second"}]}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(text, "## Translation");
    }

    #[test]
    fn missing_candidates_is_empty_response() {
        assert!(matches!(decode("{}"), Err(TranslationError::EmptyResponse)));
        assert!(matches!(
            decode(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#),
            Err(TranslationError::EmptyResponse)
        ));
        assert!(matches!(
            decode(r#"{"candidates": [{"content": {"parts": [{"text": "  "}]}}]}"#),
            Err(TranslationError::EmptyResponse)
        ));
    }

    #[test]
    fn endpoint_names_model() {
        let service = TranslationService::new(
            Client::new(),
            GeminiConfig {
                base_url: "https://example.test/v1beta".into(),
                api_key: "k".into(),
                model: "gemini-2.0-flash".into(),
            },
        );
        assert_eq!(
            service.endpoint(),
            "https://example.test/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }
}
