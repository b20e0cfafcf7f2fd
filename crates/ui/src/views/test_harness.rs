use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use canto_core::model::{QuestionBank, SpeechLanguage};
use canto_core::time::fixed_now;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{
    Clock, ElevenLabsConfig, HistoryService, SpeechService, Transcriber, TranscriptionError,
    TranslationError, Translator, TranslatorService,
};
use storage::questions::builtin_question_bank;
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::platform::{AudioPlayerRef, UiAudioPlayer};
use crate::views::{GameView, HistoryView, HomeView, SettingsView, TranslateView};

pub const CANNED_REPLY: &str = "## Translation\n**Chinese:** 早晨\n**Jyutping:** zou2 san4\n\n## Key Cantonese Words\n- **早晨** (zou2 san4): good morning\n";

struct CannedTranscriber;

#[async_trait]
impl Transcriber for CannedTranscriber {
    async fn transcribe(
        &self,
        _audio: Vec<u8>,
        _language: SpeechLanguage,
    ) -> Result<String, TranscriptionError> {
        Ok("good morning".to_string())
    }
}

struct CannedTranslator;

#[async_trait]
impl Translator for CannedTranslator {
    async fn generate(&self, _prompt: &str) -> Result<String, TranslationError> {
        Ok(CANNED_REPLY.to_string())
    }
}

#[derive(Default)]
pub struct SilentPlayer {
    pub played: Mutex<usize>,
}

impl UiAudioPlayer for SilentPlayer {
    fn play_mpeg(&self, _audio: &[u8]) -> std::io::Result<()> {
        if let Ok(mut played) = self.played.lock() {
            *played += 1;
        }
        Ok(())
    }
}

#[derive(Clone)]
struct TestApp {
    question_bank: QuestionBank,
    translator: Arc<TranslatorService>,
    history: Arc<HistoryService>,
    speech: Arc<SpeechService>,
    audio_player: AudioPlayerRef,
}

impl UiApp for TestApp {
    fn question_bank(&self) -> QuestionBank {
        self.question_bank.clone()
    }

    fn export_dir(&self) -> PathBuf {
        std::env::temp_dir()
    }

    fn translator(&self) -> Arc<TranslatorService> {
        Arc::clone(&self.translator)
    }

    fn history(&self) -> Arc<HistoryService> {
        Arc::clone(&self.history)
    }

    fn speech(&self) -> Arc<SpeechService> {
        Arc::clone(&self.speech)
    }

    fn audio_player(&self) -> AudioPlayerRef {
        Arc::clone(&self.audio_player)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Game,
    Translate,
    History,
    Settings,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Game => rsx! { GameView {} },
        ViewKind::Translate => rsx! { TranslateView {} },
        ViewKind::History => rsx! { HistoryView {} },
        ViewKind::Settings => rsx! { SettingsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub translator: Arc<TranslatorService>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let storage = Storage::in_memory();
    let translator = Arc::new(TranslatorService::new(
        Clock::fixed(fixed_now()),
        Arc::new(CannedTranscriber),
        Arc::new(CannedTranslator),
        Arc::clone(&storage.history),
    ));
    let history = Arc::new(HistoryService::new(Arc::clone(&storage.history)));
    let speech = Arc::new(SpeechService::new(
        reqwest::Client::new(),
        ElevenLabsConfig {
            base_url: "http://127.0.0.1:9".into(),
            api_key: "test".into(),
            stt_model: "scribe_v1".into(),
            tts_model: "eleven_multilingual_v2".into(),
            voice_id: "voice".into(),
        },
    ));

    let app = Arc::new(TestApp {
        question_bank: builtin_question_bank(),
        translator: Arc::clone(&translator),
        history,
        speech,
        audio_player: Arc::new(SilentPlayer::default()),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, translator }
}
