use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum number of distractors a question must carry; two are shown per round.
pub const MIN_DISTRACTORS: usize = 2;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question bank is empty")]
    EmptyBank,

    #[error("question {index} has an empty prompt")]
    EmptyPrompt { index: usize },

    #[error("question {index} has no correct answer")]
    MissingCorrectAnswer { index: usize },

    #[error("question {index} needs at least {MIN_DISTRACTORS} distractors, found {found}")]
    TooFewDistractors { index: usize, found: usize },

    #[error("question {index} lists the correct answer as a distractor")]
    DistractorMatchesAnswer { index: usize },
}

/// One quiz prompt with its correct answer and the pool of wrong answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(alias = "question")]
    prompt: String,
    #[serde(alias = "correct")]
    correct_answer: String,
    #[serde(alias = "wrong")]
    distractors: Vec<String>,
}

impl Question {
    #[must_use]
    pub fn new(
        prompt: impl Into<String>,
        correct_answer: impl Into<String>,
        distractors: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            correct_answer: correct_answer.into(),
            distractors: distractors.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn distractors(&self) -> &[String] {
        &self.distractors
    }

    fn validate(&self, index: usize) -> Result<(), QuestionError> {
        if self.prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt { index });
        }
        if self.correct_answer.trim().is_empty() {
            return Err(QuestionError::MissingCorrectAnswer { index });
        }
        let usable = self
            .distractors
            .iter()
            .filter(|d| !d.trim().is_empty())
            .count();
        if usable < MIN_DISTRACTORS || usable != self.distractors.len() {
            return Err(QuestionError::TooFewDistractors {
                index,
                found: usable,
            });
        }
        if self.distractors.iter().any(|d| *d == self.correct_answer) {
            return Err(QuestionError::DistractorMatchesAnswer { index });
        }
        Ok(())
    }
}

/// Ordered, validated list of questions for one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Validate every question once, up front.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` for an empty bank or the first malformed question.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionError> {
        if questions.is_empty() {
            return Err(QuestionError::EmptyBank);
        }
        for (index, question) in questions.iter().enumerate() {
            question.validate(index)?;
        }
        Ok(Self { questions })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed bank; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question::new("Capital of France?", "Paris", ["London", "Berlin", "Rome"])
    }

    #[test]
    fn bank_accepts_well_formed_questions() {
        let bank = QuestionBank::new(vec![sample(), sample()]).unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.get(1).unwrap().correct_answer(), "Paris");
        assert!(bank.get(2).is_none());
    }

    #[test]
    fn bank_rejects_empty_list() {
        assert_eq!(QuestionBank::new(Vec::new()), Err(QuestionError::EmptyBank));
    }

    #[test]
    fn bank_rejects_short_distractor_list_with_index() {
        let short = Question::new("2 + 2 = ?", "4", ["3"]);
        let err = QuestionBank::new(vec![sample(), short]).unwrap_err();
        assert_eq!(err, QuestionError::TooFewDistractors { index: 1, found: 1 });
    }

    #[test]
    fn bank_rejects_blank_answer_and_prompt() {
        let blank_answer = Question::new("Color of the sky?", "  ", ["Red", "Green"]);
        assert_eq!(
            QuestionBank::new(vec![blank_answer]),
            Err(QuestionError::MissingCorrectAnswer { index: 0 })
        );

        let blank_prompt = Question::new("", "Blue", ["Red", "Green"]);
        assert_eq!(
            QuestionBank::new(vec![blank_prompt]),
            Err(QuestionError::EmptyPrompt { index: 0 })
        );
    }

    #[test]
    fn bank_rejects_blank_distractors() {
        let padded = Question::new("Color of the sky?", "Blue", ["Red", ""]);
        assert_eq!(
            QuestionBank::new(vec![padded]),
            Err(QuestionError::TooFewDistractors { index: 0, found: 1 })
        );
    }

    #[test]
    fn bank_rejects_answer_listed_as_distractor() {
        let dup = Question::new("Favorite color?", "Blue", ["Red", "Blue"]);
        assert_eq!(
            QuestionBank::new(vec![dup]),
            Err(QuestionError::DistractorMatchesAnswer { index: 0 })
        );
    }
}
