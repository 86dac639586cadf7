#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog_queries;
pub mod data;
pub mod error;
pub mod progress_service;
pub mod quiz_service;

pub use training_core::Clock;

pub use app_services::AppServices;
pub use catalog_queries::{CatalogQueries, CategoryOverview, ProgressRow};
pub use data::{
    CATALOG_PATH, DataLoader, DataSource, DirDataSource, Fetched, HttpDataSource, LoadFailure,
    QUIZZES_PATH, TrainingData,
};
pub use error::{AppServicesError, LoadError, ProgressError, QuizServiceError};
pub use progress_service::{PROGRESS_STORE_KEY, ProgressService};
pub use quiz_service::QuizService;
