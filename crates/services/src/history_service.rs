use std::path::{Path, PathBuf};
use std::sync::Arc;

use canto_core::model::{TranslationEntry, TranslationId};
use storage::repository::HistoryRepository;
use tracing::info;

use crate::error::HistoryError;

/// A history entry rendered for saving as a Markdown file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkdownExport {
    pub file_name: String,
    pub contents: String,
}

#[derive(Clone)]
pub struct HistoryService {
    history: Arc<dyn HistoryRepository>,
}

impl HistoryService {
    #[must_use]
    pub fn new(history: Arc<dyn HistoryRepository>) -> Self {
        Self { history }
    }

    /// All translations, newest first.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Storage` on repository failures.
    pub async fn list(&self) -> Result<Vec<TranslationEntry>, HistoryError> {
        Ok(self.history.list().await?)
    }

    /// # Errors
    ///
    /// Returns `HistoryError::Storage` if the entry does not exist.
    pub async fn toggle_favorite(&self, id: TranslationId) -> Result<TranslationEntry, HistoryError> {
        Ok(self.history.toggle_favorite(id).await?)
    }

    /// # Errors
    ///
    /// Returns `HistoryError::Storage` on repository failures.
    pub async fn clear(&self) -> Result<(), HistoryError> {
        self.history.clear().await?;
        info!("translation history cleared");
        Ok(())
    }

    /// Render one entry as Markdown.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Storage` if the entry does not exist.
    pub async fn export_markdown(&self, id: TranslationId) -> Result<MarkdownExport, HistoryError> {
        let entry = self.history.get(id).await?;
        Ok(MarkdownExport {
            file_name: entry.export_file_name(),
            contents: entry.to_markdown(),
        })
    }

    /// Write one entry's Markdown export into `dir` and return the file path.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Storage` for a missing entry and
    /// `HistoryError::Io` if the file cannot be written.
    pub async fn export_to_dir(
        &self,
        id: TranslationId,
        dir: &Path,
    ) -> Result<PathBuf, HistoryError> {
        let export = self.export_markdown(id).await?;
        let path = dir.join(&export.file_name);
        tokio::fs::write(&path, export.contents).await?;
        info!(path = %path.display(), "exported translation");
        Ok(path)
    }
}
