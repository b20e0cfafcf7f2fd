use canto_core::parser::chinese_only;
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ElevenLabsConfig;
use crate::error::SpeechError;

/// Text-to-speech over the `ElevenLabs` API. Returns MPEG audio bytes.
#[derive(Clone)]
pub struct SpeechService {
    client: Client,
    config: ElevenLabsConfig,
}

impl SpeechService {
    #[must_use]
    pub fn new(client: Client, config: ElevenLabsConfig) -> Self {
        Self { client, config }
    }

    /// Voice configured for this service.
    #[must_use]
    pub fn default_voice(&self) -> &str {
        &self.config.voice_id
    }

    /// Synthesize the Chinese part of `text` with `voice_id`.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::NothingToSpeak` when no Chinese text remains after
    /// filtering, and `SpeechError::HttpStatus`/`Http` on request failures.
    pub async fn speak(&self, text: &str, voice_id: &str) -> Result<Vec<u8>, SpeechError> {
        let spoken = chinese_only(text);
        if spoken.is_empty() {
            return Err(SpeechError::NothingToSpeak);
        }
        debug!(chars = spoken.chars().count(), voice_id, "synthesizing speech");

        let payload = SpeechRequest::new(spoken, &self.config.tts_model);
        let response = self
            .client
            .post(self.endpoint(voice_id))
            .header("xi-api-key", &self.config.api_key)
            .header(ACCEPT, "audio/mpeg")
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "text-to-speech request rejected");
            return Err(SpeechError::HttpStatus(response.status()));
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(SpeechError::EmptyAudio);
        }
        Ok(bytes.to_vec())
    }

    fn endpoint(&self, voice_id: &str) -> String {
        format!(
            "{}/text-to-speech/{voice_id}",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[derive(Debug, Serialize)]
struct SpeechRequest {
    text: String,
    model_id: String,
    voice_settings: VoiceSettings,
}

impl SpeechRequest {
    fn new(text: String, model_id: &str) -> Self {
        Self {
            text,
            model_id: model_id.to_string(),
            voice_settings: VoiceSettings {
                stability: 0.5,
                similarity_boost: 0.5,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}
