use std::sync::Arc;

use canto_core::model::{TranslationEntry, TranslatorSettings};
use canto_core::parser::parse_translation_reply;
use storage::repository::{HistoryRepository, NewTranslation};
use tracing::{debug, info};

use crate::Clock;
use crate::error::TranslatorError;
use crate::transcription_service::Transcriber;
use crate::translation_service::Translator;

/// Voice-or-text translation pipeline that records every result in history.
#[derive(Clone)]
pub struct TranslatorService {
    clock: Clock,
    transcriber: Arc<dyn Transcriber>,
    translator: Arc<dyn Translator>,
    history: Arc<dyn HistoryRepository>,
}

impl TranslatorService {
    #[must_use]
    pub fn new(
        clock: Clock,
        transcriber: Arc<dyn Transcriber>,
        translator: Arc<dyn Translator>,
        history: Arc<dyn HistoryRepository>,
    ) -> Self {
        Self {
            clock,
            transcriber,
            translator,
            history,
        }
    }

    /// Transcribe a recording in the configured speech language.
    ///
    /// # Errors
    ///
    /// Returns `TranslatorError::Transcription` when speech-to-text fails.
    pub async fn transcribe(
        &self,
        audio: Vec<u8>,
        settings: &TranslatorSettings,
    ) -> Result<String, TranslatorError> {
        Ok(self
            .transcriber
            .transcribe(audio, settings.speech_language())
            .await?)
    }

    /// Translate `text`, parse the reply and store it in history.
    ///
    /// # Errors
    ///
    /// Returns `TranslatorError::EmptyInput` for blank text, and
    /// `Translation`/`Storage` errors from the collaborators.
    pub async fn translate_text(
        &self,
        text: &str,
        settings: &TranslatorSettings,
    ) -> Result<TranslationEntry, TranslatorError> {
        let original = text.trim();
        if original.is_empty() {
            return Err(TranslatorError::EmptyInput);
        }

        let raw = self
            .translator
            .translate(original, settings.alternative_count())
            .await?;
        let reply = parse_translation_reply(&raw);
        debug!(
            key_words = reply.key_words.len(),
            alternatives = reply.alternatives.len(),
            "parsed translation reply"
        );

        let entry = self
            .history
            .insert(NewTranslation {
                original: original.to_string(),
                translated: raw,
                reply,
                created_at: self.clock.now(),
            })
            .await?;
        info!(id = %entry.id(), "translation recorded");
        Ok(entry)
    }

    /// Transcribe then translate in one step.
    ///
    /// # Errors
    ///
    /// Any error from [`Self::transcribe`] or [`Self::translate_text`].
    pub async fn translate_audio(
        &self,
        audio: Vec<u8>,
        settings: &TranslatorSettings,
    ) -> Result<TranslationEntry, TranslatorError> {
        let transcript = self.transcribe(audio, settings).await?;
        self.translate_text(&transcript, settings).await
    }
}
