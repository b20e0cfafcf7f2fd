use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use canto_core::model::QuestionBank;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, Clock, HistoryService, ServiceConfig, SpeechService, TranslatorService};
use storage::questions::resolve_question_bank;
use storage::repository::Storage;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, AudioPlayerRef, DesktopAudioPlayer, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidPath { flag: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidPath { flag, raw } => write!(f, "invalid {flag} value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn require_path(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<PathBuf, ArgsError> {
    let value = require_value(args, flag)?;
    if value.trim().is_empty() {
        return Err(ArgsError::InvalidPath { flag, raw: value });
    }
    Ok(PathBuf::from(value))
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--questions <path.json>] [--export-dir <dir>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --questions   built-in question bank");
    eprintln!("  --export-dir  current directory");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  ELEVENLABS_API_KEY, GEMINI_API_KEY (or GOOGLE_API_KEY)   required");
    eprintln!("  ELEVENLABS_BASE_URL, ELEVENLABS_STT_MODEL, ELEVENLABS_TTS_MODEL, ELEVENLABS_VOICE_ID");
    eprintln!("  GEMINI_BASE_URL, GEMINI_MODEL, CANTO_QUESTIONS, RUST_LOG");
}

#[derive(Debug)]
struct Args {
    questions: Option<PathBuf>,
    export_dir: Option<PathBuf>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Option<Self>, ArgsError> {
        let mut questions = std::env::var("CANTO_QUESTIONS")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut export_dir = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => questions = Some(require_path(args, "--questions")?),
                "--export-dir" => export_dir = Some(require_path(args, "--export-dir")?),
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(Self {
            questions,
            export_dir,
        }))
    }
}

struct DesktopApp {
    question_bank: QuestionBank,
    export_dir: PathBuf,
    services: AppServices,
    audio_player: AudioPlayerRef,
}

impl UiApp for DesktopApp {
    fn question_bank(&self) -> QuestionBank {
        self.question_bank.clone()
    }

    fn export_dir(&self) -> PathBuf {
        self.export_dir.clone()
    }

    fn translator(&self) -> Arc<TranslatorService> {
        self.services.translator()
    }

    fn history(&self) -> Arc<HistoryService> {
        self.services.history()
    }

    fn speech(&self) -> Arc<SpeechService> {
        self.services.speech()
    }

    fn audio_player(&self) -> AudioPlayerRef {
        Arc::clone(&self.audio_player)
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let Some(args) = Args::parse(&mut argv).inspect_err(|_| print_usage())? else {
        print_usage();
        return Ok(());
    };

    // Fail before the window opens when keys or files are wrong.
    let config = ServiceConfig::from_env()?;
    let question_bank = resolve_question_bank(args.questions.as_deref())?;
    let export_dir = match args.export_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let storage = Storage::in_memory();
    let services = AppServices::new(config, Clock::default(), &storage);
    info!(
        questions = question_bank.len(),
        export_dir = %export_dir.display(),
        "starting Canto Runner"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        question_bank,
        export_dir,
        services,
        audio_player: Arc::new(DesktopAudioPlayer::default()),
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Canto Runner")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &[&str]) -> Result<Option<Args>, ArgsError> {
        let mut iter = raw.iter().map(|s| (*s).to_string());
        Args::parse(&mut iter)
    }

    #[test]
    fn parses_paths() {
        let args = parse(&["--questions", "bank.json", "--export-dir", "out"])
            .unwrap()
            .unwrap();
        assert_eq!(args.questions, Some(PathBuf::from("bank.json")));
        assert_eq!(args.export_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn help_short_circuits() {
        assert!(parse(&["--help"]).unwrap().is_none());
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(matches!(
            parse(&["--questions"]),
            Err(ArgsError::MissingValue { flag: "--questions" })
        ));
        assert!(matches!(
            parse(&["--export-dir", " "]),
            Err(ArgsError::InvalidPath { flag: "--export-dir", .. })
        ));
        assert!(matches!(parse(&["--verbose"]), Err(ArgsError::UnknownArg(_))));
    }
}
