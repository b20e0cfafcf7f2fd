use chrono::{DateTime, Utc};

use crate::model::{TranslationId, TranslationReply};

/// A translation the user produced during this run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslationEntry {
    id: TranslationId,
    original: String,
    translated: String,
    reply: TranslationReply,
    favorite: bool,
    created_at: DateTime<Utc>,
}

impl TranslationEntry {
    #[must_use]
    pub fn new(
        id: TranslationId,
        original: impl Into<String>,
        translated: impl Into<String>,
        reply: TranslationReply,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original: original.into(),
            translated: translated.into(),
            reply,
            favorite: false,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> TranslationId {
        self.id
    }

    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Raw reply text as returned by the translation service.
    #[must_use]
    pub fn translated(&self) -> &str {
        &self.translated
    }

    #[must_use]
    pub fn reply(&self) -> &TranslationReply {
        &self.reply
    }

    #[must_use]
    pub fn favorite(&self) -> bool {
        self.favorite
    }

    pub fn toggle_favorite(&mut self) {
        self.favorite = !self.favorite;
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Markdown document offered for download.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        format!(
            "# Translation\n\n**Original:** {}\n\n**Translated:** {}",
            self.original, self.translated
        )
    }

    /// File name used when exporting, e.g. `translation-1700000000000.md`.
    #[must_use]
    pub fn export_file_name(&self) -> String {
        format!("translation-{}.md", self.created_at.timestamp_millis())
    }
}
