use async_trait::async_trait;
use canto_core::model::{TranslationEntry, TranslationId};
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),
}

/// What a caller hands the repository; the id is assigned on insert.
#[derive(Debug, Clone)]
pub struct NewTranslation {
    pub original: String,
    pub translated: String,
    pub reply: canto_core::model::TranslationReply,
    pub created_at: DateTime<Utc>,
}

/// Repository contract for translation history.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Store a translation and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the entry cannot be stored.
    async fn insert(&self, entry: NewTranslation) -> Result<TranslationEntry, StorageError>;

    /// All entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on adapter failures.
    async fn list(&self) -> Result<Vec<TranslationEntry>, StorageError>;

    /// Fetch one entry.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing.
    async fn get(&self, id: TranslationId) -> Result<TranslationEntry, StorageError>;

    /// Flip the favorite flag and return the updated entry.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing.
    async fn toggle_favorite(&self, id: TranslationId) -> Result<TranslationEntry, StorageError>;

    /// Remove every entry.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on adapter failures.
    async fn clear(&self) -> Result<(), StorageError>;
}

#[derive(Default)]
struct HistoryTable {
    next_id: u64,
    entries: Vec<TranslationEntry>,
}

/// Process-lifetime history; nothing is written to disk.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    history: Arc<Mutex<HistoryTable>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HistoryTable>, StorageError> {
        self.history
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))
    }
}

#[async_trait]
impl HistoryRepository for InMemoryRepository {
    async fn insert(&self, entry: NewTranslation) -> Result<TranslationEntry, StorageError> {
        let mut guard = self.lock()?;
        guard.next_id += 1;
        let stored = TranslationEntry::new(
            TranslationId::new(guard.next_id),
            entry.original,
            entry.translated,
            entry.reply,
            entry.created_at,
        );
        guard.entries.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<TranslationEntry>, StorageError> {
        let guard = self.lock()?;
        let mut entries = guard.entries.clone();
        entries.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().cmp(&a.id()))
        });
        Ok(entries)
    }

    async fn get(&self, id: TranslationId) -> Result<TranslationEntry, StorageError> {
        let guard = self.lock()?;
        guard
            .entries
            .iter()
            .find(|entry| entry.id() == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn toggle_favorite(&self, id: TranslationId) -> Result<TranslationEntry, StorageError> {
        let mut guard = self.lock()?;
        let entry = guard
            .entries
            .iter_mut()
            .find(|entry| entry.id() == id)
            .ok_or(StorageError::NotFound)?;
        entry.toggle_favorite();
        Ok(entry.clone())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let mut guard = self.lock()?;
        guard.entries.clear();
        Ok(())
    }
}

/// Repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub history: Arc<dyn HistoryRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let history: Arc<dyn HistoryRepository> = Arc::new(InMemoryRepository::new());
        Self { history }
    }
}
