use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use canto_core::model::{QuestionBank, SettingsError, TranslatorSettings, TranslatorSettingsDraft};
use services::{HistoryService, SpeechService, TranslatorService};

use crate::platform::AudioPlayerRef;

pub trait UiApp: Send + Sync {
    fn question_bank(&self) -> QuestionBank;
    fn export_dir(&self) -> PathBuf;

    fn translator(&self) -> Arc<TranslatorService>;
    fn history(&self) -> Arc<HistoryService>;
    fn speech(&self) -> Arc<SpeechService>;
    fn audio_player(&self) -> AudioPlayerRef;
}

#[derive(Clone)]
pub struct AppContext {
    question_bank: QuestionBank,
    export_dir: PathBuf,
    settings: Arc<RwLock<TranslatorSettings>>,

    translator: Arc<TranslatorService>,
    history: Arc<HistoryService>,
    speech: Arc<SpeechService>,
    audio_player: AudioPlayerRef,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            question_bank: app.question_bank(),
            export_dir: app.export_dir(),
            settings: Arc::new(RwLock::new(TranslatorSettings::default())),
            translator: app.translator(),
            history: app.history(),
            speech: app.speech(),
            audio_player: app.audio_player(),
        }
    }

    #[must_use]
    pub fn question_bank(&self) -> QuestionBank {
        self.question_bank.clone()
    }

    #[must_use]
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone()
    }

    /// Current translator settings; defaults until the user saves.
    #[must_use]
    pub fn settings(&self) -> TranslatorSettings {
        match self.settings.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Validate and apply new translator settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` when the draft is invalid; nothing changes then.
    pub fn update_settings(
        &self,
        draft: TranslatorSettingsDraft,
    ) -> Result<TranslatorSettings, SettingsError> {
        let settings = draft.validate()?;
        match self.settings.write() {
            Ok(mut guard) => *guard = settings.clone(),
            Err(poisoned) => *poisoned.into_inner() = settings.clone(),
        }
        Ok(settings)
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

    #[must_use]
    pub fn audio_player(&self) -> AudioPlayerRef {
        Arc::clone(&self.audio_player)
    }
}

// Provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
