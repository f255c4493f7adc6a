//! Error types shared by the validator, the stores, and the HTTP layer.
//!
//! # Design
//! `NotFound` keeps its two causes apart even though clients see a single
//! 404 for both. `StoreError` covers anything that went wrong talking to the
//! entity store; its source is kept for logging and never shown to clients.

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A candidate todo failed one of the field rules. Rules are checked in
/// declaration order and only the first failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required and must be a non-empty string with at least 3 characters.")]
    Title,

    #[error("Description is required and must be a non-empty string with at least 5 characters.")]
    Description,

    #[error("isCompleted is required and must be a boolean.")]
    IsCompleted,
}

/// The requested todo could not be located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NotFound {
    /// The identifier is not valid store syntax, so no lookup was attempted.
    #[error("identifier is not a valid object id")]
    MalformedId,

    /// The identifier is well formed but no record carries it.
    #[error("no todo with that identifier")]
    Missing,
}

/// Failure communicating with or executing against the entity store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(#[source] BoxError),

    /// The store accepted the request but failed to carry it out.
    #[error("store operation failed: {0}")]
    Backend(#[source] BoxError),
}

impl StoreError {
    pub fn unavailable(err: impl Into<BoxError>) -> Self {
        StoreError::Unavailable(err.into())
    }

    pub fn backend(err: impl Into<BoxError>) -> Self {
        StoreError::Backend(err.into())
    }
}
