//! MongoDB-backed `TodoStore`.
//!
//! # Design
//! Records live in the `todos` collection as
//! `{_id, title, description, isCompleted, createdAt, updatedAt}`. Missing
//! `description` and `isCompleted` read back as `""` and `false`; writes
//! always carry every field since they come from a validated `NewTodo`.
//! The driver pools connections internally, so one `MongoStore` is shared by
//! every request.

use std::time::Duration;

use async_trait::async_trait;
use bson::{doc, oid::ObjectId, DateTime};
use futures_util::TryStreamExt;
use mongodb::{
    error::{Error as MongoError, ErrorKind},
    options::{ClientOptions, ReturnDocument},
    Client, Collection,
};
use serde::{Deserialize, Serialize};
use todo_core::{NewTodo, StoreError, Todo, TodoId, TodoStore};

pub const COLLECTION: &str = "todos";
const APP_NAME: &str = "todo-server";

#[derive(Debug, Serialize, Deserialize)]
struct TodoDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "isCompleted", default)]
    is_completed: bool,
    #[serde(rename = "createdAt")]
    created_at: DateTime,
    #[serde(rename = "updatedAt")]
    updated_at: DateTime,
}

impl From<TodoDocument> for Todo {
    fn from(doc: TodoDocument) -> Self {
        Todo {
            id: doc.id.into(),
            title: doc.title,
            description: doc.description,
            is_completed: doc.is_completed,
            created_at: doc.created_at.to_chrono(),
            updated_at: doc.updated_at.to_chrono(),
        }
    }
}

#[derive(Clone)]
pub struct MongoStore {
    collection: Collection<TodoDocument>,
}

impl MongoStore {
    /// Connect and ping the server so an unreachable store fails here rather
    /// than on the first request.
    pub async fn connect(uri: &str, database: &str, timeout: Duration) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(uri)
            .await
            .map_err(StoreError::unavailable)?;
        options.server_selection_timeout = Some(timeout);
        options.connect_timeout = Some(timeout);
        options.app_name = Some(APP_NAME.to_string());

        let client = Client::with_options(options).map_err(StoreError::unavailable)?;
        let db = client.database(database);
        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(StoreError::unavailable)?;

        tracing::info!(database, collection = COLLECTION, "MongoDB connected");
        Ok(Self {
            collection: db.collection(COLLECTION),
        })
    }
}

fn store_error(err: MongoError) -> StoreError {
    if matches!(
        err.kind.as_ref(),
        ErrorKind::ServerSelection { .. } | ErrorKind::Io(_)
    ) {
        StoreError::unavailable(err)
    } else {
        StoreError::backend(err)
    }
}

#[async_trait]
impl TodoStore for MongoStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let cursor = self.collection.find(doc! {}).await.map_err(store_error)?;
        let docs: Vec<TodoDocument> = cursor.try_collect().await.map_err(store_error)?;
        Ok(docs.into_iter().map(Todo::from).collect())
    }

    async fn insert(&self, todo: NewTodo) -> Result<Todo, StoreError> {
        let now = DateTime::now();
        let document = TodoDocument {
            id: ObjectId::new(),
            title: todo.title,
            description: todo.description,
            is_completed: todo.is_completed,
            created_at: now,
            updated_at: now,
        };
        self.collection
            .insert_one(&document)
            .await
            .map_err(store_error)?;
        Ok(document.into())
    }

    async fn get(&self, id: TodoId) -> Result<Option<Todo>, StoreError> {
        let found = self
            .collection
            .find_one(doc! { "_id": id.object_id() })
            .await
            .map_err(store_error)?;
        Ok(found.map(Todo::from))
    }

    async fn replace(&self, id: TodoId, todo: NewTodo) -> Result<Option<Todo>, StoreError> {
        let NewTodo {
            title,
            description,
            is_completed,
        } = todo;
        let update = doc! {
            "$set": {
                "title": title,
                "description": description,
                "isCompleted": is_completed,
                "updatedAt": DateTime::now(),
            }
        };
        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": id.object_id() }, update)
            .return_document(ReturnDocument::After)
            .await
            .map_err(store_error)?;
        Ok(updated.map(Todo::from))
    }

    async fn delete(&self, id: TodoId) -> Result<bool, StoreError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.object_id() })
            .await
            .map_err(store_error)?;
        Ok(result.deleted_count > 0)
    }
}
