//! Question banks: the built-in set and JSON files supplied at launch.

use std::path::Path;

use canto_core::model::{Question, QuestionBank, QuestionError};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionLoadError {
    #[error("failed to read question file: {0}")]
    Io(#[from] std::io::Error),

    #[error("question file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] QuestionError),
}

/// The five questions shipped with the game.
///
/// # Panics
///
/// Never in practice; the built-in questions satisfy bank validation.
#[must_use]
pub fn builtin_question_bank() -> QuestionBank {
    let questions = vec![
        Question::new("Capital of France?", "Paris", ["London", "Berlin", "Rome"]),
        Question::new("2 + 2 = ?", "4", ["3", "5", "22"]),
        Question::new("Color of the sky?", "Blue", ["Red", "Green", "Yellow"]),
        Question::new("Who is a guy?", "Colton", ["Han", "Mara", "Felicia"]),
        Question::new("Favorite color?", "Blue", ["Red", "Green", "Yellow"]),
    ];
    QuestionBank::new(questions).expect("built-in questions are valid")
}

/// Parse a bank from a JSON array of questions.
///
/// Both `{"prompt", "correct_answer", "distractors"}` and the short
/// `{"question", "correct", "wrong"}` field names are accepted.
///
/// # Errors
///
/// Returns `QuestionLoadError::Parse` for malformed JSON and
/// `QuestionLoadError::Invalid` when a question fails validation.
pub fn parse_question_bank(json: &str) -> Result<QuestionBank, QuestionLoadError> {
    let questions: Vec<Question> = serde_json::from_str(json)?;
    debug!(count = questions.len(), "parsed question file");
    Ok(QuestionBank::new(questions)?)
}

/// Read and validate a bank from disk.
///
/// # Errors
///
/// Returns `QuestionLoadError` if the file cannot be read, parsed or validated.
pub fn load_question_bank(path: &Path) -> Result<QuestionBank, QuestionLoadError> {
    let json = std::fs::read_to_string(path)?;
    let bank = parse_question_bank(&json)?;
    info!(path = %path.display(), questions = bank.len(), "loaded question bank");
    Ok(bank)
}

/// Load `path` when given, otherwise fall back to the built-in bank.
///
/// # Errors
///
/// Returns `QuestionLoadError` only when an explicit path fails to load.
pub fn resolve_question_bank(path: Option<&Path>) -> Result<QuestionBank, QuestionLoadError> {
    match path {
        Some(path) => load_question_bank(path),
        None => Ok(builtin_question_bank()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_bank_has_five_questions() {
        let bank = builtin_question_bank();
        assert_eq!(bank.len(), 5);
        assert_eq!(bank.get(0).unwrap().correct_answer(), "Paris");
    }

    #[test]
    fn parses_short_field_names() {
        let bank = parse_question_bank(
            r#"[{"question": "1 + 1?", "correct": "2", "wrong": ["1", "3"]}]"#,
        )
        .unwrap();
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.get(0).unwrap().prompt(), "1 + 1?");
        assert_eq!(bank.get(0).unwrap().distractors(), ["1", "3"]);
    }

    #[test]
    fn parses_long_field_names() {
        let bank = parse_question_bank(
            r#"[{"prompt": "Hi?", "correct_answer": "你好", "distractors": ["再見", "多謝"]}]"#,
        )
        .unwrap();
        assert_eq!(bank.get(0).unwrap().correct_answer(), "你好");
    }

    #[test]
    fn rejects_invalid_banks() {
        assert!(matches!(
            parse_question_bank("[]"),
            Err(QuestionLoadError::Invalid(QuestionError::EmptyBank))
        ));
        assert!(matches!(
            parse_question_bank(r#"[{"question": "Q", "correct": "A", "wrong": ["B"]}]"#),
            Err(QuestionLoadError::Invalid(QuestionError::TooFewDistractors { index: 0, found: 1 }))
        ));
        assert!(matches!(
            parse_question_bank("not json"),
            Err(QuestionLoadError::Parse(_))
        ));
    }

    #[test]
    fn loads_from_file_and_reports_missing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"question": "Q", "correct": "A", "wrong": ["B", "C"]}}]"#
        )
        .unwrap();

        let bank = resolve_question_bank(Some(file.path())).unwrap();
        assert_eq!(bank.len(), 1);

        let missing = load_question_bank(Path::new("/definitely/not/here.json"));
        assert!(matches!(missing, Err(QuestionLoadError::Io(_))));

        assert_eq!(resolve_question_bank(None).unwrap().len(), 5);
    }
}
