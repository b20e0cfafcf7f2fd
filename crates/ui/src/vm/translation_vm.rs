use canto_core::model::{TranslationEntry, TranslatorSettings};

use crate::vm::markdown_vm::markdown_to_html;
use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyWordVm {
    pub word: String,
    pub pronunciation: Option<String>,
    pub meaning: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlternativeVm {
    pub kind: String,
    pub chinese: String,
    pub jyutping: Option<String>,
}

/// What the translate and history screens show for one translation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslationVm {
    pub id: u64,
    pub original: String,
    pub chinese: Option<String>,
    pub jyutping: Option<String>,
    pub key_words: Vec<KeyWordVm>,
    pub alternatives: Vec<AlternativeVm>,
    /// Sanitized HTML of the raw reply, shown when nothing could be parsed.
    pub raw_html: String,
    /// The full reply, as copied to the clipboard.
    pub translated: String,
    pub speak_text: String,
    pub favorite: bool,
    pub created_at_str: String,
}

impl TranslationVm {
    #[must_use]
    pub fn is_structured(&self) -> bool {
        self.chinese.is_some() || !self.key_words.is_empty() || !self.alternatives.is_empty()
    }
}

/// Map a stored entry, hiding romanization when the user turned it off.
#[must_use]
pub fn map_translation(entry: &TranslationEntry, settings: &TranslatorSettings) -> TranslationVm {
    let reply = entry.reply();
    let show = settings.show_jyutping();
    let romanization = |value: &str| (show && !value.is_empty()).then(|| value.to_string());

    let chinese = (!reply.translation.chinese.is_empty()).then(|| reply.translation.chinese.clone());
    let speak_text = chinese
        .clone()
        .unwrap_or_else(|| entry.translated().to_string());

    TranslationVm {
        id: entry.id().value(),
        original: entry.original().to_string(),
        chinese,
        jyutping: romanization(&reply.translation.jyutping),
        key_words: reply
            .key_words
            .iter()
            .map(|word| KeyWordVm {
                word: word.word.clone(),
                pronunciation: romanization(&word.pronunciation),
                meaning: word.meaning.clone(),
            })
            .collect(),
        alternatives: reply
            .alternatives
            .iter()
            .map(|alt| AlternativeVm {
                kind: alt.kind.clone(),
                chinese: alt.chinese.clone(),
                jyutping: romanization(&alt.jyutping),
            })
            .collect(),
        raw_html: markdown_to_html(entry.translated()),
        translated: entry.translated().to_string(),
        speak_text,
        favorite: entry.favorite(),
        created_at_str: format_datetime(entry.created_at()),
    }
}

#[must_use]
pub fn map_translations(
    entries: &[TranslationEntry],
    settings: &TranslatorSettings,
) -> Vec<TranslationVm> {
    entries
        .iter()
        .map(|entry| map_translation(entry, settings))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use canto_core::model::{
        KeyWord, TranslationId, TranslationLine, TranslationReply, TranslatorSettingsDraft,
    };
    use canto_core::time::fixed_now;

    fn entry(reply: TranslationReply) -> TranslationEntry {
        TranslationEntry::new(
            TranslationId::new(4),
            "thank you",
            "## Translation\n**Chinese:** 多謝",
            reply,
            fixed_now(),
        )
    }

    fn parsed() -> TranslationReply {
        TranslationReply {
            translation: TranslationLine {
                chinese: "多謝".into(),
                jyutping: "do1 ze6".into(),
            },
            key_words: vec![KeyWord {
                word: "多謝".into(),
                pronunciation: "do1 ze6".into(),
                meaning: "thank you".into(),
            }],
            alternatives: Vec::new(),
        }
    }

    #[test]
    fn maps_parsed_reply() {
        let vm = map_translation(&entry(parsed()), &TranslatorSettings::default());
        assert_eq!(vm.id, 4);
        assert_eq!(vm.chinese.as_deref(), Some("多謝"));
        assert_eq!(vm.jyutping.as_deref(), Some("do1 ze6"));
        assert_eq!(vm.key_words[0].pronunciation.as_deref(), Some("do1 ze6"));
        assert_eq!(vm.speak_text, "多謝");
        assert_eq!(vm.translated, "## Translation\n**Chinese:** 多謝");
        assert!(vm.is_structured());
        assert_eq!(vm.created_at_str, "2023-11-14 22:13");
    }

    #[test]
    fn hides_jyutping_when_disabled() {
        let settings = TranslatorSettingsDraft {
            show_jyutping: false,
            alternative_count: 3,
            speech_language: "cantonese".into(),
        }
        .validate()
        .unwrap();
        let vm = map_translation(&entry(parsed()), &settings);
        assert_eq!(vm.jyutping, None);
        assert_eq!(vm.key_words[0].pronunciation, None);
    }

    #[test]
    fn unparsed_reply_falls_back_to_raw_text() {
        let vm = map_translation(&entry(TranslationReply::default()), &TranslatorSettings::default());
        assert!(!vm.is_structured());
        assert!(vm.raw_html.contains("<h2>Translation</h2>"));
        assert!(vm.speak_text.contains("多謝"));
    }
}
