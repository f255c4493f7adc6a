//! Resource handlers for `/api/todo`.
//!
//! Each handler is one store call bracketed by input checks and response
//! shaping. Identifier syntax is checked before the body, and both before the
//! store is touched.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    Json,
};
use todo_core::{validate, NotFound, Todo};

use crate::envelope::{Envelope, TodoView};
use crate::error::{ApiError, Operation};
use crate::extract::{TodoBody, TodoIdPath};
use crate::AppState;

pub const HEALTH_MESSAGE: &str = "Todo API is working";

type ApiResult<T> = Result<Json<Envelope<T>>, ApiError>;

pub async fn health() -> &'static str {
    HEALTH_MESSAGE
}

#[tracing::instrument(skip_all)]
pub async fn list_todos(State(state): State<AppState>) -> ApiResult<Vec<Todo>> {
    let todos = state
        .store
        .list()
        .await
        .map_err(ApiError::store(Operation::List))?;
    tracing::debug!(count = todos.len(), "listed todos");
    Ok(Json(Envelope::listed(todos)))
}

#[tracing::instrument(skip_all)]
pub async fn create_todo(
    State(state): State<AppState>,
    TodoBody(payload): TodoBody,
) -> Result<(StatusCode, Json<Envelope<TodoView>>), ApiError> {
    let input = validate(&payload)?;
    let todo = state
        .store
        .insert(input)
        .await
        .map_err(ApiError::store(Operation::Create))?;
    tracing::info!(id = %todo.id, "created todo");
    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_message(
            "Task created successfully",
            Some(TodoView::created(todo)),
        )),
    ))
}

#[tracing::instrument(skip(state))]
pub async fn get_todo(
    State(state): State<AppState>,
    TodoIdPath(id): TodoIdPath,
) -> ApiResult<TodoView> {
    let todo = state
        .store
        .get(id)
        .await
        .map_err(ApiError::store(Operation::Get))?
        .ok_or(NotFound::Missing)?;
    Ok(Json(Envelope::ok(TodoView::summary(todo))))
}

/// The body is buffered raw and parsed only after the path, so a malformed
/// id wins over a malformed body.
#[tracing::instrument(skip(state, body))]
pub async fn update_todo(
    State(state): State<AppState>,
    TodoIdPath(id): TodoIdPath,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<TodoView> {
    let body = body.map_err(|_| ApiError::MalformedBody)?;
    let TodoBody(payload) = TodoBody::parse(&body)?;
    let input = validate(&payload)?;
    let todo = state
        .store
        .replace(id, input)
        .await
        .map_err(ApiError::store(Operation::Update))?
        .ok_or(NotFound::Missing)?;
    tracing::info!(id = %todo.id, "updated todo");
    Ok(Json(Envelope::with_message(
        "Task updated successfully",
        Some(TodoView::summary(todo)),
    )))
}

#[tracing::instrument(skip(state))]
pub async fn delete_todo(
    State(state): State<AppState>,
    TodoIdPath(id): TodoIdPath,
) -> ApiResult<()> {
    let deleted = state
        .store
        .delete(id)
        .await
        .map_err(ApiError::store(Operation::Delete))?;
    if !deleted {
        return Err(NotFound::Missing.into());
    }
    tracing::info!(%id, "deleted todo");
    Ok(Json(Envelope::with_message("Task deleted successfully", None)))
}
