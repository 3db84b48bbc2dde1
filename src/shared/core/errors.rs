// Typed failures shared by every domain service.
//
// Purpose
// - Give the application one vocabulary for rejecting a request.
//
// Responsibilities
// - Distinguish caller mistakes (validation, conflicts, unknown ids) from
//   backend faults, so the HTTP layer can map them to status codes.
// - Report ownership failures exactly like absence: a caller probing ids
//   owned by another user learns nothing beyond "not found".

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(&'static str),

    #[error("authentication required")]
    Authentication,

    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(message.into())
    }
}
