//! Request extractors for todo identifiers and candidate todos.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde_json::Value;
use todo_core::{NotFound, TodoId, TodoPayload};

use crate::error::ApiError;

/// The `{id}` path segment parsed as a store identifier.
///
/// Segments that fail percent-decoding (invalid UTF-8 and the like) are
/// malformed ids just as non-hex ones are, so every failure is a 404.
#[derive(Debug, Clone, Copy)]
pub struct TodoIdPath(pub TodoId);

impl<S> FromRequestParts<S> for TodoIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound(NotFound::MalformedId))?;
        Ok(TodoIdPath(TodoId::parse(&raw)?))
    }
}

/// A candidate todo read from the request body.
///
/// An empty body is an empty candidate, which the validator then rejects on
/// its first rule. Anything that is not a JSON object is `MalformedBody`.
/// The content type is not checked.
#[derive(Debug)]
pub struct TodoBody(pub TodoPayload);

impl TodoBody {
    /// Parse an already-buffered body. Lets a handler defer body errors until
    /// after it has checked the path.
    pub fn parse(bytes: &[u8]) -> Result<Self, ApiError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(TodoBody(TodoPayload::default()));
        }

        let value: Value = serde_json::from_slice(bytes).map_err(|_| ApiError::MalformedBody)?;
        if !value.is_object() {
            return Err(ApiError::MalformedBody);
        }
        serde_json::from_value(value)
            .map(TodoBody)
            .map_err(|_| ApiError::MalformedBody)
    }
}

impl<S> FromRequest<S> for TodoBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::MalformedBody)?;
        TodoBody::parse(&bytes)
    }
}
