//! Error types for the catalog actor.

use crate::validation::{FormErrors, FORM_ERROR_NOTICE};
use thiserror::Error;

/// Errors returned by [`CatalogClient`](super::CatalogClient) calls.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// No product has the given id.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// A product with this id is already in the collection.
    #[error("Duplicate product id: {0}")]
    DuplicateId(String),

    /// The submitted form failed validation; per-field messages are attached.
    #[error("{}", FORM_ERROR_NOTICE)]
    Validation(FormErrors),

    /// The actor is no longer accepting requests.
    #[error("Actor closed")]
    ActorClosed,

    /// The actor dropped the request without answering.
    #[error("Actor dropped response channel")]
    ActorDropped,

    /// The actor task panicked or was cancelled.
    #[error("Actor task failed: {0}")]
    TaskFailed(String),
}

impl From<FormErrors> for CatalogError {
    fn from(errors: FormErrors) -> Self {
        CatalogError::Validation(errors)
    }
}
