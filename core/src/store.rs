//! The entity store seam.
//!
//! Handlers only ever see `dyn TodoStore`; the store owns durable storage,
//! identifier generation, and timestamps. Each method is one store call with
//! no retries.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::{NewTodo, Todo, TodoId};

#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Every todo, in whatever order the store keeps them.
    async fn list(&self) -> Result<Vec<Todo>, StoreError>;

    /// Persist a validated todo, assigning its id and timestamps.
    async fn insert(&self, todo: NewTodo) -> Result<Todo, StoreError>;

    async fn get(&self, id: TodoId) -> Result<Option<Todo>, StoreError>;

    /// Overwrite all three mutable fields and return the record as it is
    /// after the write. `None` when no record has this id.
    async fn replace(&self, id: TodoId, todo: NewTodo) -> Result<Option<Todo>, StoreError>;

    /// Remove the record, returning whether anything was deleted.
    async fn delete(&self, id: TodoId) -> Result<bool, StoreError>;
}
