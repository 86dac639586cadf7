//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;
use training_core::QuizError;

/// Why the catalog or quiz document could not be used.
///
/// `resource` is the file name shown to the learner, e.g. `catalog.json`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("{resource} failed: {status}")]
    HttpStatus {
        resource: &'static str,
        status: reqwest::StatusCode,
    },
    #[error("{resource} failed: {source}")]
    Http {
        resource: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{resource} failed: {source}")]
    Io {
        resource: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("{resource} failed: invalid url: {source}")]
    Url {
        resource: &'static str,
        #[source]
        source: url::ParseError,
    },
    #[error("{resource} is not valid JSON: {source}")]
    Json {
        resource: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{resource} {source}")]
    Invalid {
        resource: &'static str,
        #[source]
        source: training_core::Error,
    },
}

/// Errors emitted by `ProgressService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("progress could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
