use thiserror::Error;

use crate::model::{MediaError, QuizError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Media(#[from] MediaError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}
