//! Store contract exercised against the in-process `MemoryStore`.
//!
//! Each test drives the store only through the `TodoStore` trait object, the
//! same way the HTTP handlers do.

use std::sync::Arc;

use todo_core::{MemoryStore, NewTodo, TodoId, TodoStore};

fn store() -> Arc<dyn TodoStore> {
    Arc::new(MemoryStore::new())
}

fn new_todo(title: &str, is_completed: bool) -> NewTodo {
    NewTodo {
        title: title.to_string(),
        description: "details here".to_string(),
        is_completed,
    }
}

#[tokio::test]
async fn empty_store_lists_nothing() {
    assert!(store().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn insert_assigns_distinct_ids() {
    let store = store();
    let a = store.insert(new_todo("First", false)).await.unwrap();
    let b = store.insert(new_todo("Second", false)).await.unwrap();
    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn list_returns_records_in_insertion_order() {
    let store = store();
    for title in ["one", "two", "three"] {
        store.insert(new_todo(title, false)).await.unwrap();
    }
    let titles: Vec<String> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|todo| todo.title)
        .collect();
    assert_eq!(titles, ["one", "two", "three"]);
}

#[tokio::test]
async fn get_unknown_id_is_none() {
    let store = store();
    store.insert(new_todo("Present", false)).await.unwrap();
    assert!(store.get(TodoId::generate()).await.unwrap().is_none());
}

#[tokio::test]
async fn replace_overwrites_every_mutable_field() {
    let store = store();
    let created = store.insert(new_todo("Before", false)).await.unwrap();

    let replaced = store
        .replace(
            created.id,
            NewTodo {
                title: "After".to_string(),
                description: "new details".to_string(),
                is_completed: true,
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(replaced.id, created.id);
    assert_eq!(replaced.title, "After");
    assert_eq!(replaced.description, "new details");
    assert!(replaced.is_completed);
    assert_eq!(replaced.created_at, created.created_at);
    assert!(replaced.updated_at >= created.updated_at);

    let fetched = store.get(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, replaced);
}

#[tokio::test]
async fn replace_unknown_id_is_none() {
    let store = store();
    let result = store
        .replace(TodoId::generate(), new_todo("Ghost", true))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn delete_reports_whether_a_record_was_removed() {
    let store = store();
    let created = store.insert(new_todo("Doomed", false)).await.unwrap();

    assert!(store.delete(created.id).await.unwrap());
    assert!(!store.delete(created.id).await.unwrap());
    assert!(store.get(created.id).await.unwrap().is_none());
    assert!(store.list().await.unwrap().is_empty());
}
