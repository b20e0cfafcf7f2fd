use std::sync::Arc;

use reqwest::Client;
use storage::repository::Storage;

use crate::Clock;
use crate::config::ServiceConfig;
use crate::history_service::HistoryService;
use crate::speech_service::SpeechService;
use crate::transcription_service::{Transcriber, TranscriptionService};
use crate::translation_service::{TranslationService, Translator};
use crate::translator_service::TranslatorService;

/// Assembles the app-facing services around one HTTP client and one storage.
#[derive(Clone)]
pub struct AppServices {
    translator: Arc<TranslatorService>,
    history: Arc<HistoryService>,
    speech: Arc<SpeechService>,
}

impl AppServices {
    /// Build services that talk to the configured remote APIs.
    #[must_use]
    pub fn new(config: ServiceConfig, clock: Clock, storage: &Storage) -> Self {
        let client = Client::new();
        let transcriber: Arc<dyn Transcriber> = Arc::new(TranscriptionService::new(
            client.clone(),
            config.elevenlabs.clone(),
        ));
        let translator: Arc<dyn Translator> =
            Arc::new(TranslationService::new(client.clone(), config.gemini));
        let speech = Arc::new(SpeechService::new(client, config.elevenlabs));
        Self::from_parts(clock, storage, transcriber, translator, speech)
    }

    /// Build services around caller-supplied clients.
    #[must_use]
    pub fn from_parts(
        clock: Clock,
        storage: &Storage,
        transcriber: Arc<dyn Transcriber>,
        translator: Arc<dyn Translator>,
        speech: Arc<SpeechService>,
    ) -> Self {
        let translator = Arc::new(TranslatorService::new(
            clock,
            transcriber,
            translator,
            Arc::clone(&storage.history),
        ));
        let history = Arc::new(HistoryService::new(Arc::clone(&storage.history)));
        Self {
            translator,
            history,
            speech,
        }
    }

    #[must_use]
    pub fn translator(&self) -> Arc<TranslatorService> {
        Arc::clone(&self.translator)
    }

    #[must_use]
    pub fn history(&self) -> Arc<HistoryService> {
        Arc::clone(&self.history)
    }

    #[must_use]
    pub fn speech(&self) -> Arc<SpeechService> {
        Arc::clone(&self.speech)
    }
}
