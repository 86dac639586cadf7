use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::data::{DataLoader, DataSource, LoadFailure, TrainingData};
use crate::error::{AppServicesError, LoadError};
use crate::progress_service::ProgressService;
use crate::quiz_service::QuizService;

/// Assembles app-facing services around the documents loaded at boot.
#[derive(Clone)]
pub struct AppServices {
    data: Result<Arc<TrainingData>, LoadFailure>,
    progress: Arc<ProgressService>,
    quiz: Arc<QuizService>,
}

impl AppServices {
    /// Build services over `storage` and load the documents from `source`.
    ///
    /// A failed load is kept, not returned, so the UI can show it.
    pub async fn boot(clock: Clock, storage: &Storage, source: Arc<dyn DataSource>) -> Self {
        let data = DataLoader::new(source).load().await;
        Self::from_parts(clock, storage, data)
    }

    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn boot_sqlite(
        db_url: &str,
        clock: Clock,
        source: Arc<dyn DataSource>,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::boot(clock, &storage, source).await)
    }

    #[must_use]
    pub fn from_parts(
        clock: Clock,
        storage: &Storage,
        data: Result<TrainingData, LoadError>,
    ) -> Self {
        let progress = Arc::new(ProgressService::new(Arc::clone(&storage.records)));
        let quiz = Arc::new(QuizService::new(clock, Arc::clone(&progress)));
        Self {
            data: data.map(Arc::new).map_err(|err| LoadFailure::from(&err)),
            progress,
            quiz,
        }
    }

    /// The loaded documents, or why they could not be loaded.
    ///
    /// # Errors
    ///
    /// Returns the boot-time `LoadFailure`.
    pub fn data(&self) -> Result<Arc<TrainingData>, LoadFailure> {
        self.data.clone()
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}
