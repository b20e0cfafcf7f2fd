use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prompt::DEFAULT_ALTERNATIVE_COUNT;

pub const MIN_ALTERNATIVES: u8 = 1;
pub const MAX_ALTERNATIVES: u8 = 5;

/// Language the speech-to-text service should expect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeechLanguage {
    #[default]
    Cantonese,
    Mandarin,
    English,
}

impl SpeechLanguage {
    pub const ALL: [SpeechLanguage; 3] = [
        SpeechLanguage::Cantonese,
        SpeechLanguage::Mandarin,
        SpeechLanguage::English,
    ];

    /// ISO 639-3 code sent to the transcription service.
    #[must_use]
    pub fn language_code(self) -> &'static str {
        match self {
            SpeechLanguage::Cantonese => "yue",
            SpeechLanguage::Mandarin => "cmn",
            SpeechLanguage::English => "eng",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SpeechLanguage::Cantonese => "Cantonese (粵語)",
            SpeechLanguage::Mandarin => "Mandarin (普通話)",
            SpeechLanguage::English => "English",
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            SpeechLanguage::Cantonese => "cantonese",
            SpeechLanguage::Mandarin => "mandarin",
            SpeechLanguage::English => "english",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.key().eq_ignore_ascii_case(key.trim()))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("alternative count must be between {MIN_ALTERNATIVES} and {MAX_ALTERNATIVES}, got {0}")]
    AlternativeCountOutOfRange(u8),
    #[error("unknown speech language: {0}")]
    UnknownSpeechLanguage(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslatorSettings {
    show_jyutping: bool,
    alternative_count: u8,
    speech_language: SpeechLanguage,
}

#[derive(Clone, Debug)]
pub struct TranslatorSettingsDraft {
    pub show_jyutping: bool,
    pub alternative_count: u8,
    pub speech_language: String,
}

impl TranslatorSettingsDraft {
    /// Validate the draft into settings the translator can use.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the alternative count is outside `1..=5`
    /// or the speech language is not recognised.
    pub fn validate(self) -> Result<TranslatorSettings, SettingsError> {
        if !(MIN_ALTERNATIVES..=MAX_ALTERNATIVES).contains(&self.alternative_count) {
            return Err(SettingsError::AlternativeCountOutOfRange(
                self.alternative_count,
            ));
        }
        let speech_language = SpeechLanguage::from_key(&self.speech_language)
            .ok_or(SettingsError::UnknownSpeechLanguage(self.speech_language))?;

        Ok(TranslatorSettings {
            show_jyutping: self.show_jyutping,
            alternative_count: self.alternative_count,
            speech_language,
        })
    }
}

impl From<&TranslatorSettings> for TranslatorSettingsDraft {
    fn from(settings: &TranslatorSettings) -> Self {
        Self {
            show_jyutping: settings.show_jyutping,
            alternative_count: settings.alternative_count,
            speech_language: settings.speech_language.key().to_string(),
        }
    }
}

impl TranslatorSettings {
    #[must_use]
    pub fn show_jyutping(&self) -> bool {
        self.show_jyutping
    }

    #[must_use]
    pub fn alternative_count(&self) -> u8 {
        self.alternative_count
    }

    #[must_use]
    pub fn speech_language(&self) -> SpeechLanguage {
        self.speech_language
    }
}

impl Default for TranslatorSettings {
    fn default() -> Self {
        Self {
            show_jyutping: true,
            alternative_count: DEFAULT_ALTERNATIVE_COUNT,
            speech_language: SpeechLanguage::Cantonese,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(count: u8, language: &str) -> TranslatorSettingsDraft {
        TranslatorSettingsDraft {
            show_jyutping: false,
            alternative_count: count,
            speech_language: language.to_string(),
        }
    }

    #[test]
    fn draft_validates_into_settings() {
        let settings = draft(5, " Mandarin ").validate().unwrap();
        assert!(!settings.show_jyutping());
        assert_eq!(settings.alternative_count(), 5);
        assert_eq!(settings.speech_language(), SpeechLanguage::Mandarin);
        assert_eq!(settings.speech_language().language_code(), "cmn");
    }

    #[test]
    fn draft_rejects_out_of_range_count() {
        assert_eq!(
            draft(0, "cantonese").validate(),
            Err(SettingsError::AlternativeCountOutOfRange(0))
        );
        assert_eq!(
            draft(6, "cantonese").validate(),
            Err(SettingsError::AlternativeCountOutOfRange(6))
        );
    }

    #[test]
    fn draft_rejects_unknown_language() {
        assert_eq!(
            draft(2, "klingon").validate(),
            Err(SettingsError::UnknownSpeechLanguage("klingon".into()))
        );
    }

    #[test]
    fn defaults_round_trip_through_draft() {
        let defaults = TranslatorSettings::default();
        let again = TranslatorSettingsDraft::from(&defaults).validate().unwrap();
        assert_eq!(again, defaults);
        assert_eq!(defaults.alternative_count(), 3);
    }
}
