//! Best-effort extraction of structured fields from a translation reply.
//!
//! The reply is free text that usually follows the template in
//! [`crate::prompt`]. Parsing never fails: anything that does not match is
//! skipped, and an entry missing a companion line is dropped.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{Alternative, KeyWord, TranslationLine, TranslationReply};

/// `**Label:** value`, `**Label**: value`, optionally as a list item.
static FIELD_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[-*+]\s+|\d+[.)]\s+)?\*\*(?P<label>[^*]+?)\s*:?\s*\*\*\s*:?\s*(?P<value>.*)$")
        .expect("field pattern compiles")
});

/// `- **word** (pronunciation): meaning`
static KEY_WORD_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[-*+]\s+|\d+[.)]\s+)\*\*(?P<word>[^*]+)\*\*\s*[(（](?P<pron>[^)）]*)[)）]\s*[:：\-–—]\s*(?P<meaning>.+)$",
    )
    .expect("key word pattern compiles")
});

static PARENTHESISED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)|（[^）]*）").expect("parenthesis pattern compiles"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    Preamble,
    Translation,
    KeyWords,
    Alternatives,
    Other,
}

impl Section {
    fn from_header(title: &str) -> Self {
        let title = title.to_lowercase();
        if title.contains("alternative") {
            Section::Alternatives
        } else if title.contains("key") || title.contains("word") || title.contains("vocab") {
            Section::KeyWords
        } else if title.contains("translation") {
            Section::Translation
        } else {
            Section::Other
        }
    }
}

#[derive(Default)]
struct ParseState {
    reply: TranslationReply,
    pending_chinese: Option<String>,
    pending_word: Option<(String, Option<String>)>,
    pending_alternative: Option<(String, String)>,
}

impl ParseState {
    fn reset_pending(&mut self) {
        self.pending_chinese = None;
        self.pending_word = None;
        self.pending_alternative = None;
    }

    fn translation_field(&mut self, label: &str, value: &str) {
        match label {
            "chinese" | "cantonese" | "traditional chinese" => {
                self.pending_chinese = (!value.is_empty()).then(|| value.to_string());
            }
            "jyutping" | "romanization" | "romanisation" => {
                let Some(chinese) = self.pending_chinese.take() else {
                    return;
                };
                if !value.is_empty() && self.reply.translation.is_empty() {
                    self.reply.translation = TranslationLine {
                        chinese,
                        jyutping: value.to_string(),
                    };
                }
            }
            _ => {}
        }
    }

    fn key_word_field(&mut self, label: &str, value: &str) {
        match label {
            "word" | "chinese" | "cantonese" => {
                self.pending_word = (!value.is_empty()).then(|| (value.to_string(), None));
            }
            "pronunciation" | "jyutping" => {
                self.pending_word = match self.pending_word.take() {
                    Some((word, None)) if !value.is_empty() => {
                        Some((word, Some(value.to_string())))
                    }
                    _ => None,
                };
            }
            "meaning" | "english" | "definition" => {
                if let Some((word, Some(pronunciation))) = self.pending_word.take() {
                    if !value.is_empty() {
                        self.reply.key_words.push(KeyWord {
                            word,
                            pronunciation,
                            meaning: value.to_string(),
                        });
                    }
                }
            }
            _ => {}
        }
    }

    fn inline_key_word(&mut self, word: &str, pronunciation: &str, meaning: &str) {
        self.pending_word = None;
        if word.is_empty() || pronunciation.is_empty() || meaning.is_empty() {
            return;
        }
        self.reply.key_words.push(KeyWord {
            word: word.to_string(),
            pronunciation: pronunciation.to_string(),
            meaning: meaning.to_string(),
        });
    }

    fn alternative_field(&mut self, raw_label: &str, label: &str, value: &str) {
        if matches!(label, "jyutping" | "romanization" | "romanisation") {
            if let Some((kind, chinese)) = self.pending_alternative.take() {
                if !value.is_empty() {
                    self.reply.alternatives.push(Alternative {
                        kind,
                        chinese,
                        jyutping: value.to_string(),
                    });
                }
            }
        } else {
            self.pending_alternative =
                (!value.is_empty()).then(|| (raw_label.to_string(), value.to_string()));
        }
    }
}

/// Extract the translation, key words and alternative phrasings from a reply.
#[must_use]
pub fn parse_translation_reply(text: &str) -> TranslationReply {
    let mut state = ParseState::default();
    let mut section = Section::Preamble;

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(title) = header_title(line) {
            section = Section::from_header(title);
            state.reset_pending();
            continue;
        }

        match section {
            Section::Preamble | Section::Other => {}
            Section::Translation => {
                if let Some((raw_label, value)) = field(line) {
                    state.translation_field(&raw_label.to_lowercase(), value);
                }
            }
            Section::KeyWords => {
                if let Some(caps) = KEY_WORD_ITEM.captures(line) {
                    state.inline_key_word(
                        caps["word"].trim(),
                        caps["pron"].trim(),
                        caps["meaning"].trim(),
                    );
                } else if let Some((raw_label, value)) = field(line) {
                    state.key_word_field(&raw_label.to_lowercase(), value);
                }
            }
            Section::Alternatives => {
                if let Some((raw_label, value)) = field(line) {
                    state.alternative_field(raw_label, &raw_label.to_lowercase(), value);
                }
            }
        }
    }

    state.reply
}

/// Keep only the Chinese text of a translation, for speech synthesis.
///
/// Parenthesised asides and Latin letters (romanization, English glosses) are
/// removed and whitespace is collapsed.
#[must_use]
pub fn chinese_only(text: &str) -> String {
    let without_asides = PARENTHESISED.replace_all(text, " ");
    let kept: String = without_asides
        .chars()
        .map(|c| {
            if is_latin(c) || matches!(c, '*' | '#' | ':' | '_') {
                ' '
            } else {
                c
            }
        })
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_latin(c: char) -> bool {
    c.is_ascii_alphanumeric() || ('\u{00C0}'..='\u{024F}').contains(&c)
}

fn header_title(line: &str) -> Option<&str> {
    let stripped = line.trim_start_matches('#');
    if stripped.len() == line.len() {
        return None;
    }
    Some(stripped.trim().trim_matches('*').trim())
}

fn field(line: &str) -> Option<(&str, &str)> {
    let caps = FIELD_LINE.captures(line)?;
    let label = caps.name("label")?.as_str().trim();
    let value = caps.name("value")?.as_str().trim();
    Some((label, value))
}
