use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use canto_core::model::{SpeechLanguage, TranslatorSettings, TranslatorSettingsDraft};
use canto_core::time::fixed_now;
use services::{
    Clock, HistoryService, Transcriber, TranscriptionError, TranslationError, Translator,
    TranslatorError, TranslatorService,
};
use storage::repository::Storage;

const REPLY: &str = "## Translation\n**Chinese:** 多謝\n**Jyutping:** do1 ze6\n\n## Key Cantonese Words\n- **多謝** (do1 ze6): thank you\n";

struct FakeTranscriber {
    languages: Mutex<Vec<SpeechLanguage>>,
}

#[async_trait]
impl Transcriber for FakeTranscriber {
    async fn transcribe(
        &self,
        audio: Vec<u8>,
        language: SpeechLanguage,
    ) -> Result<String, TranscriptionError> {
        if audio.is_empty() {
            return Err(TranscriptionError::EmptyAudio);
        }
        self.languages.lock().unwrap().push(language);
        Ok("thank you".to_string())
    }
}

struct FakeTranslator {
    prompts: Mutex<Vec<String>>,
    reply: Option<&'static str>,
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn generate(&self, prompt: &str) -> Result<String, TranslationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply
            .map(str::to_string)
            .ok_or(TranslationError::EmptyResponse)
    }
}

struct Harness {
    translator: TranslatorService,
    history: HistoryService,
    fake_transcriber: Arc<FakeTranscriber>,
    fake_translator: Arc<FakeTranslator>,
}

fn harness(reply: Option<&'static str>) -> Harness {
    let storage = Storage::in_memory();
    let fake_transcriber = Arc::new(FakeTranscriber {
        languages: Mutex::new(Vec::new()),
    });
    let fake_translator = Arc::new(FakeTranslator {
        prompts: Mutex::new(Vec::new()),
        reply,
    });
    let translator = TranslatorService::new(
        Clock::fixed(fixed_now()),
        Arc::clone(&fake_transcriber) as Arc<dyn Transcriber>,
        Arc::clone(&fake_translator) as Arc<dyn Translator>,
        Arc::clone(&storage.history),
    );
    let history = HistoryService::new(Arc::clone(&storage.history));
    Harness {
        translator,
        history,
        fake_transcriber,
        fake_translator,
    }
}

#[tokio::test]
async fn text_translation_is_parsed_and_recorded() {
    let h = harness(Some(REPLY));
    let settings = TranslatorSettingsDraft {
        show_jyutping: true,
        alternative_count: 2,
        speech_language: "cantonese".into(),
    }
    .validate()
    .unwrap();

    let entry = h
        .translator
        .translate_text("  thank you  ", &settings)
        .await
        .expect("translate");

    assert_eq!(entry.original(), "thank you");
    assert_eq!(entry.translated(), REPLY);
    assert_eq!(entry.reply().translation.chinese, "多謝");
    assert_eq!(entry.reply().key_words.len(), 1);
    assert_eq!(entry.created_at(), fixed_now());

    let prompts = h.fake_translator.prompts.lock().unwrap().clone();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("\"thank you\""));
    assert!(prompts[0].contains("Give 2 alternative"));

    let listed = h.history.list().await.unwrap();
    assert_eq!(listed, vec![entry]);
}

#[tokio::test]
async fn translate_wraps_transcript_in_prompt_template() {
    let h = harness(Some(REPLY));
    let reply = h.fake_translator.translate("good morning", 4).await.unwrap();
    assert_eq!(reply, REPLY);

    let prompts = h.fake_translator.prompts.lock().unwrap().clone();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Text: \"good morning\""));
    assert!(prompts[0].contains("Give 4 alternative"));
    assert!(prompts[0].contains("**Jyutping:**"));
}

#[tokio::test]
async fn blank_text_is_rejected_without_calling_translator() {
    let h = harness(Some(REPLY));
    let result = h
        .translator
        .translate_text("   ", &TranslatorSettings::default())
        .await;
    assert!(matches!(result, Err(TranslatorError::EmptyInput)));
    assert!(h.fake_translator.prompts.lock().unwrap().is_empty());
    assert!(h.history.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn failed_translation_records_nothing() {
    let h = harness(None);
    let result = h
        .translator
        .translate_text("hello", &TranslatorSettings::default())
        .await;
    assert!(matches!(
        result,
        Err(TranslatorError::Translation(TranslationError::EmptyResponse))
    ));
    assert!(h.history.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn audio_flows_through_transcriber_with_configured_language() {
    let h = harness(Some(REPLY));
    let settings = TranslatorSettingsDraft {
        show_jyutping: false,
        alternative_count: 1,
        speech_language: "english".into(),
    }
    .validate()
    .unwrap();

    let entry = h
        .translator
        .translate_audio(vec![1, 2, 3], &settings)
        .await
        .unwrap();
    assert_eq!(entry.original(), "thank you");
    assert_eq!(
        *h.fake_transcriber.languages.lock().unwrap(),
        vec![SpeechLanguage::English]
    );

    let empty = h.translator.transcribe(Vec::new(), &settings).await;
    assert!(matches!(
        empty,
        Err(TranslatorError::Transcription(TranscriptionError::EmptyAudio))
    ));
}

#[tokio::test]
async fn history_favorites_exports_and_clears() {
    let h = harness(Some(REPLY));
    let settings = TranslatorSettings::default();
    let first = h.translator.translate_text("thanks", &settings).await.unwrap();
    let second = h.translator.translate_text("thank you", &settings).await.unwrap();

    let listed = h.history.list().await.unwrap();
    assert_eq!(listed[0].id(), second.id());
    assert_eq!(listed[1].id(), first.id());

    let toggled = h.history.toggle_favorite(first.id()).await.unwrap();
    assert!(toggled.favorite());
    let toggled = h.history.toggle_favorite(first.id()).await.unwrap();
    assert!(!toggled.favorite());

    let export = h.history.export_markdown(first.id()).await.unwrap();
    assert_eq!(export.file_name, "translation-1700000000000.md");
    assert!(export.contents.starts_with("# Translation\n\n**Original:** thanks\n\n**Translated:** "));

    let dir = tempfile::tempdir().unwrap();
    let path = h.history.export_to_dir(first.id(), dir.path()).await.unwrap();
    assert_eq!(std::fs::read_to_string(path).unwrap(), export.contents);

    h.history.clear().await.unwrap();
    assert!(h.history.list().await.unwrap().is_empty());
}
