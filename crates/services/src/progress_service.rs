use std::sync::Arc;

use storage::repository::KeyValueRepository;
use training_core::ProgressStore;

use crate::error::ProgressError;

/// Fixed key of the serialized progress record.
pub const PROGRESS_STORE_KEY: &str = "cdfarmasi_training_v1";

/// Loads and saves the learner's progress as one JSON record.
#[derive(Clone)]
pub struct ProgressService {
    records: Arc<dyn KeyValueRepository>,
}

impl ProgressService {
    #[must_use]
    pub fn new(records: Arc<dyn KeyValueRepository>) -> Self {
        Self { records }
    }

    /// Read the stored progress.
    ///
    /// A missing or unreadable record yields an empty store; corrupt content is
    /// never reported.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` only when the backend itself fails.
    pub async fn load(&self) -> Result<ProgressStore, ProgressError> {
        let raw = self.records.get(PROGRESS_STORE_KEY).await?;
        Ok(decode(raw.as_deref()))
    }

    /// Overwrite the stored record with `store`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if encoding or the write fails.
    pub async fn save(&self, store: &ProgressStore) -> Result<(), ProgressError> {
        let raw = serde_json::to_string(store)?;
        self.records.set(PROGRESS_STORE_KEY, &raw).await?;
        Ok(())
    }

    /// Delete the stored record for every category.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the delete fails.
    pub async fn reset(&self) -> Result<(), ProgressError> {
        self.records.remove(PROGRESS_STORE_KEY).await?;
        tracing::info!("progress reset");
        Ok(())
    }
}

fn decode(raw: Option<&str>) -> ProgressStore {
    raw.and_then(|raw| serde_json::from_str(raw).ok())
        .unwrap_or_default()
}
