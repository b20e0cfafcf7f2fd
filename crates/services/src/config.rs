//! Remote service configuration read from the environment.

use std::env;

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_ELEVENLABS_BASE_URL: &str = "https://api.elevenlabs.io/v1";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_STT_MODEL: &str = "scribe_v1";
pub const DEFAULT_TTS_MODEL: &str = "eleven_multilingual_v2";
pub const DEFAULT_VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";

/// Speech-to-text and text-to-speech settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElevenLabsConfig {
    pub base_url: String,
    pub api_key: String,
    pub stt_model: String,
    pub tts_model: String,
    pub voice_id: String,
}

/// Generative-text settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeminiConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    pub elevenlabs: ElevenLabsConfig,
    pub gemini: GeminiConfig,
}

impl ServiceConfig {
    /// Read configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingVar` when a required key is absent and
    /// `ConfigError::InvalidUrl` when a base URL does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read configuration through `lookup`, treating blank values as unset.
    ///
    /// # Errors
    ///
    /// Same as [`ServiceConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let elevenlabs_key =
            get("ELEVENLABS_API_KEY").ok_or(ConfigError::MissingVar("ELEVENLABS_API_KEY"))?;
        let gemini_key = get("GEMINI_API_KEY")
            .or_else(|| get("GOOGLE_API_KEY"))
            .ok_or(ConfigError::MissingVar("GEMINI_API_KEY"))?;

        let elevenlabs_base = base_url(
            "ELEVENLABS_BASE_URL",
            get("ELEVENLABS_BASE_URL"),
            DEFAULT_ELEVENLABS_BASE_URL,
        )?;
        let gemini_base = base_url(
            "GEMINI_BASE_URL",
            get("GEMINI_BASE_URL"),
            DEFAULT_GEMINI_BASE_URL,
        )?;

        Ok(Self {
            elevenlabs: ElevenLabsConfig {
                base_url: elevenlabs_base,
                api_key: elevenlabs_key,
                stt_model: get("ELEVENLABS_STT_MODEL").unwrap_or_else(|| DEFAULT_STT_MODEL.into()),
                tts_model: get("ELEVENLABS_TTS_MODEL").unwrap_or_else(|| DEFAULT_TTS_MODEL.into()),
                voice_id: get("ELEVENLABS_VOICE_ID").unwrap_or_else(|| DEFAULT_VOICE_ID.into()),
            },
            gemini: GeminiConfig {
                base_url: gemini_base,
                api_key: gemini_key,
                model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.into()),
            },
        })
    }
}

fn base_url(
    var: &'static str,
    value: Option<String>,
    default: &str,
) -> Result<String, ConfigError> {
    let raw = value.unwrap_or_else(|| default.to_string());
    Url::parse(&raw).map_err(|source| ConfigError::InvalidUrl { var, source })?;
    Ok(raw.trim_end_matches('/').to_string())
}
