use std::sync::Arc;

use serde::de::DeserializeOwned;
use training_core::model::{Catalog, QuizBank};

use super::source::{DataSource, Fetched};
use crate::error::LoadError;

pub const CATALOG_PATH: &str = "assets/data/catalog.json";
pub const QUIZZES_PATH: &str = "assets/data/quizzes.json";

/// File name of a document path, used in failure messages.
#[must_use]
pub fn resource_name(path: &'static str) -> &'static str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Both documents, parsed and validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainingData {
    pub catalog: Catalog,
    pub quizzes: QuizBank,
}

/// Fetches the catalog and quiz documents together; either failing fails both.
#[derive(Clone)]
pub struct DataLoader {
    source: Arc<dyn DataSource>,
}

impl DataLoader {
    #[must_use]
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    /// Load and validate `catalog.json` and `quizzes.json`.
    ///
    /// # Errors
    ///
    /// Returns the first `LoadError` in document order: transport failures,
    /// non-success statuses, malformed JSON, then validation.
    pub async fn load(&self) -> Result<TrainingData, LoadError> {
        tracing::debug!(catalog = CATALOG_PATH, quizzes = QUIZZES_PATH, "loading training data");
        let (catalog, quizzes) = tokio::join!(
            self.source.fetch(CATALOG_PATH),
            self.source.fetch(QUIZZES_PATH)
        );
        let result = Self::assemble(catalog, quizzes);
        if let Err(err) = &result {
            tracing::warn!(error = %err, "training data failed to load");
        }
        result
    }

    fn assemble(
        catalog: Result<Fetched, LoadError>,
        quizzes: Result<Fetched, LoadError>,
    ) -> Result<TrainingData, LoadError> {
        let catalog = require_success(CATALOG_PATH, catalog?)?;
        let quizzes = require_success(QUIZZES_PATH, quizzes?)?;

        let catalog: Catalog = parse(CATALOG_PATH, &catalog)?;
        let quizzes: QuizBank = parse(QUIZZES_PATH, &quizzes)?;

        catalog.validate().map_err(|err| LoadError::Invalid {
            resource: resource_name(CATALOG_PATH),
            source: err.into(),
        })?;
        quizzes.validate().map_err(|err| LoadError::Invalid {
            resource: resource_name(QUIZZES_PATH),
            source: err.into(),
        })?;

        Ok(TrainingData { catalog, quizzes })
    }
}

fn require_success(path: &'static str, fetched: Fetched) -> Result<String, LoadError> {
    if fetched.status.is_success() {
        Ok(fetched.body)
    } else {
        Err(LoadError::HttpStatus {
            resource: resource_name(path),
            status: fetched.status,
        })
    }
}

fn parse<T: DeserializeOwned>(path: &'static str, body: &str) -> Result<T, LoadError> {
    serde_json::from_str(body).map_err(|source| LoadError::Json {
        resource: resource_name(path),
        source,
    })
}


/// Display snapshot of a `LoadError`, cheap to clone into views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub message: String,
}

impl From<&LoadError> for LoadFailure {
    fn from(err: &LoadError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}
