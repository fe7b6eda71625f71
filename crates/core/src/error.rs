use thiserror::Error;

use crate::model::{CategoryError, QuestionError, QuizError, UploadError};

/// Client-side input checks that fail before any request is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error(transparent)]
    Category(#[from] CategoryError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Upload(#[from] UploadError),
}
