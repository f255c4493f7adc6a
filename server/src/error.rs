//! Mapping from handler failures to HTTP responses.
//!
//! # Design
//! Each variant decides its status code and the message the client sees.
//! Store failures are logged with their source but answered with a fixed,
//! per-operation message. Both not-found causes answer the same 404; the
//! cause survives in the log line and in `ApiError` itself.

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use todo_core::{NotFound, StoreError, ValidationError};

use crate::envelope::Envelope;

pub const NOT_FOUND_MESSAGE: &str = "Task not found";
pub const MALFORMED_BODY_MESSAGE: &str = "Request body must be a JSON object.";

/// The resource operation a store failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Get,
    Update,
    Delete,
}

impl Operation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::List => "There is a server side error fetching todos",
            Operation::Create => "There is a server side error while creating todo",
            Operation::Get => "There is a server side error while fetching todo by ID",
            Operation::Update => "There is a server side error while updating todo",
            Operation::Delete => "There is a server side error while deleting todo",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Create => "create",
            Operation::Get => "get",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("request body is not a JSON object")]
    MalformedBody,

    #[error("todo not found: {0}")]
    NotFound(#[from] NotFound),

    #[error("{op} failed: {source}")]
    Store {
        op: Operation,
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    pub fn store(op: Operation) -> impl FnOnce(StoreError) -> Self {
        move |source| ApiError::Store { op, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedBody => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message placed in the response envelope.
    pub fn client_message(&self) -> String {
        match self {
            ApiError::Validation(err) => err.to_string(),
            ApiError::MalformedBody => MALFORMED_BODY_MESSAGE.to_string(),
            ApiError::NotFound(_) => NOT_FOUND_MESSAGE.to_string(),
            ApiError::Store { op, .. } => op.failure_message().to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Store { op, source } => {
                tracing::error!(operation = %op, error = %source, "store call failed");
            }
            ApiError::NotFound(cause) => {
                tracing::debug!(cause = ?cause, "todo not found");
            }
            ApiError::Validation(_) | ApiError::MalformedBody => {
                tracing::debug!(error = %self, "rejected request body");
            }
        }

        let body = Envelope::<()>::failure(self.client_message());
        (self.status(), Json(body)).into_response()
    }
}
