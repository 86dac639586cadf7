mod loader;
mod source;

pub use loader::{
    CATALOG_PATH, DataLoader, LoadFailure, QUIZZES_PATH, TrainingData, resource_name,
};
pub use source::{DataSource, DirDataSource, Fetched, HttpDataSource};
