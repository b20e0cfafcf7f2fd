//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;

/// Errors raised while reading service configuration from the environment.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("{var} is not a valid URL: {source}")]
    InvalidUrl {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },
}

/// Errors emitted by `TranscriptionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TranscriptionError {
    #[error("no audio was recorded")]
    EmptyAudio,
    #[error("speech-to-text returned no transcript")]
    EmptyTranscript,
    #[error("speech-to-text request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `TranslationService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TranslationError {
    #[error("translation returned an empty response")]
    EmptyResponse,
    #[error("translation request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `SpeechService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SpeechError {
    #[error("there is no Chinese text to speak")]
    NothingToSpeak,
    #[error("text-to-speech returned no audio")]
    EmptyAudio,
    #[error("text-to-speech request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `HistoryService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HistoryError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors emitted by `TranslatorService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TranslatorError {
    #[error("enter some text to translate")]
    EmptyInput,
    #[error(transparent)]
    Transcription(#[from] TranscriptionError),
    #[error(transparent)]
    Translation(#[from] TranslationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
