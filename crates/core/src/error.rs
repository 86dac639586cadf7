use thiserror::Error;

use crate::model::{CatalogError, QuestionError};
use crate::quiz::QuizError;

/// Any domain rule violation raised by this crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}
