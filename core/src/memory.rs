//! In-process store backed by a vector behind a read-write lock.
//!
//! Insertion order is the native order returned by `list`. Clones share the
//! same underlying records.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::model::{NewTodo, Todo, TodoId};
use crate::store::TodoStore;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    todos: Arc<RwLock<Vec<Todo>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.todos.read().await.clone())
    }

    async fn insert(&self, todo: NewTodo) -> Result<Todo, StoreError> {
        let now = Utc::now();
        let todo = Todo {
            id: TodoId::generate(),
            title: todo.title,
            description: todo.description,
            is_completed: todo.is_completed,
            created_at: now,
            updated_at: now,
        };
        self.todos.write().await.push(todo.clone());
        tracing::trace!(id = %todo.id, "inserted todo");
        Ok(todo)
    }

    async fn get(&self, id: TodoId) -> Result<Option<Todo>, StoreError> {
        let todos = self.todos.read().await;
        Ok(todos.iter().find(|todo| todo.id == id).cloned())
    }

    async fn replace(&self, id: TodoId, input: NewTodo) -> Result<Option<Todo>, StoreError> {
        let mut todos = self.todos.write().await;
        let Some(todo) = todos.iter_mut().find(|todo| todo.id == id) else {
            return Ok(None);
        };
        todo.title = input.title;
        todo.description = input.description;
        todo.is_completed = input.is_completed;
        todo.updated_at = Utc::now();
        Ok(Some(todo.clone()))
    }

    async fn delete(&self, id: TodoId) -> Result<bool, StoreError> {
        let mut todos = self.todos.write().await;
        let before = todos.len();
        todos.retain(|todo| todo.id != id);
        Ok(todos.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_todo(title: &str) -> NewTodo {
        NewTodo {
            title: title.to_string(),
            description: "something to do".to_string(),
            is_completed: false,
        }
    }

    #[tokio::test]
    async fn insert_stamps_both_timestamps_equally() {
        let store = MemoryStore::new();
        let todo = store.insert(new_todo("Stamp")).await.unwrap();
        assert_eq!(todo.created_at, todo.updated_at);
    }

    #[tokio::test]
    async fn clones_share_records() {
        let store = MemoryStore::new();
        let other = store.clone();
        let todo = store.insert(new_todo("Shared")).await.unwrap();
        assert_eq!(other.get(todo.id).await.unwrap(), Some(todo));
    }
}
