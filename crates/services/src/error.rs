//! Shared error types for the services crate.

use thiserror::Error;

use eco_core::model::{MediaError, QuizError};

/// Errors emitted while building the lesson catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error(transparent)]
    Media(#[from] MediaError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

/// Errors emitted by `StudyFlowService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StudyError {
    #[error(transparent)]
    Quiz(#[from] QuizError),
}
