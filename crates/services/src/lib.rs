#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod error;
pub mod history_service;
pub mod speech_service;
pub mod transcription_service;
pub mod translation_service;
pub mod translator_service;

pub use canto_core::Clock;

pub use app_services::AppServices;
pub use config::{ElevenLabsConfig, GeminiConfig, ServiceConfig};
pub use error::{
    ConfigError, HistoryError, SpeechError, TranscriptionError, TranslationError, TranslatorError,
};
pub use history_service::{HistoryService, MarkdownExport};
pub use speech_service::SpeechService;
pub use transcription_service::{Transcriber, TranscriptionService};
pub use translation_service::{TranslationService, Translator};
pub use translator_service::TranslatorService;
