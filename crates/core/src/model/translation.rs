use serde::{Deserialize, Serialize};

/// The main Cantonese rendering of the input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationLine {
    pub chinese: String,
    pub jyutping: String,
}

impl TranslationLine {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chinese.is_empty() && self.jyutping.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyWord {
    pub word: String,
    pub pronunciation: String,
    pub meaning: String,
}

/// An alternative phrasing, tagged with its register (e.g. "Casual", "Formal").
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    pub kind: String,
    pub chinese: String,
    pub jyutping: String,
}

/// Structured view of one reply from the translation service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationReply {
    pub translation: TranslationLine,
    pub key_words: Vec<KeyWord>,
    pub alternatives: Vec<Alternative>,
}

impl TranslationReply {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.translation.is_empty() && self.key_words.is_empty() && self.alternatives.is_empty()
    }
}
