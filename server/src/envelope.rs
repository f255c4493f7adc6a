//! JSON response envelope and the todo views returned inside it.
//!
//! # Design
//! Every response, success or failure, is `{success, message?, count?,
//! data?}` with absent fields omitted. Views decide which record fields a
//! given operation exposes; only create includes `createdAt`, and only list
//! returns full records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use todo_core::{Todo, TodoId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            count: None,
            data: Some(data),
        }
    }

    pub fn with_message(message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            count: None,
            data,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            count: None,
            data: None,
        }
    }
}

impl<T> Envelope<Vec<T>> {
    pub fn listed(items: Vec<T>) -> Self {
        Self {
            success: true,
            message: None,
            count: Some(items.len()),
            data: Some(items),
        }
    }
}

/// A todo as returned by create, get, and update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoView {
    pub id: TodoId,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl TodoView {
    /// Mutable fields only; used by get and update.
    pub fn summary(todo: Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title,
            description: todo.description,
            is_completed: todo.is_completed,
            created_at: None,
        }
    }

    /// Summary plus creation time; used by create.
    pub fn created(todo: Todo) -> Self {
        let created_at = todo.created_at;
        Self {
            created_at: Some(created_at),
            ..Self::summary(todo)
        }
    }
}
