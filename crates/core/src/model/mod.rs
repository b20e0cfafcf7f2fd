mod history;
mod ids;
mod question;
mod round;
mod settings;
mod translation;

pub use history::TranslationEntry;
pub use ids::TranslationId;
pub use question::{MIN_DISTRACTORS, Question, QuestionBank, QuestionError};
pub use round::{InputEdges, LANE_COUNT, Lane, RoundOutcome, RoundResult, RoundState};
pub use settings::{
    MAX_ALTERNATIVES, MIN_ALTERNATIVES, SettingsError, SpeechLanguage, TranslatorSettings,
    TranslatorSettingsDraft,
};
pub use translation::{Alternative, KeyWord, TranslationLine, TranslationReply};
