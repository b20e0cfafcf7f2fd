use async_trait::async_trait;
use canto_core::model::SpeechLanguage;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::ElevenLabsConfig;
use crate::error::TranscriptionError;

/// Turns recorded audio into text.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe one recording.
    ///
    /// # Errors
    ///
    /// Returns `TranscriptionError` when the audio is empty, the request fails,
    /// or no transcript comes back.
    async fn transcribe(
        &self,
        audio: Vec<u8>,
        language: SpeechLanguage,
    ) -> Result<String, TranscriptionError>;
}

/// Speech-to-text over the `ElevenLabs` API.
#[derive(Clone)]
pub struct TranscriptionService {
    client: Client,
    config: ElevenLabsConfig,
}

impl TranscriptionService {
    #[must_use]
    pub fn new(client: Client, config: ElevenLabsConfig) -> Self {
        Self { client, config }
    }

    fn endpoint(&self) -> String {
        format!("{}/speech-to-text", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Transcriber for TranscriptionService {
    async fn transcribe(
        &self,
        audio: Vec<u8>,
        language: SpeechLanguage,
    ) -> Result<String, TranscriptionError> {
        if audio.is_empty() {
            return Err(TranscriptionError::EmptyAudio);
        }
        debug!(bytes = audio.len(), language = language.language_code(), "transcribing audio");

        let file = Part::bytes(audio)
            .file_name("audio.wav")
            .mime_str("audio/wav")?;
        let form = Form::new()
            .part("file", file)
            .text("model_id", self.config.stt_model.clone())
            .text("language_code", language.language_code());

        let response = self
            .client
            .post(self.endpoint())
            .header("xi-api-key", &self.config.api_key)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "speech-to-text request rejected");
            return Err(TranscriptionError::HttpStatus(response.status()));
        }

        let body: TranscriptResponse = response.json().await?;
        body.into_text()
    }
}

#[derive(Debug, Deserialize)]
struct TranscriptResponse {
    #[serde(default)]
    text: Option<String>,
}

impl TranscriptResponse {
    fn into_text(self) -> Result<String, TranscriptionError> {
        self.text
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(TranscriptionError::EmptyTranscript)
    }
}
