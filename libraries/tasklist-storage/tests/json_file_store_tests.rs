//! Integration tests for the JSON document store.
//!
//! Every test works on a fresh document inside a temporary directory.

use chrono::{TimeZone, Utc};
use serde_json::{json, Map};
use std::sync::Arc;
use tasklist_core::{CoreError, NewTask, Task, TaskId, TaskStore, User};
use tasklist_storage::{JsonFileStore, StorageError};
use tempfile::TempDir;

fn create_test_store() -> (JsonFileStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path().join("db.json"));
    (store, temp_dir)
}

fn sample_task(id: i64, text: &str) -> Task {
    let ts = Utc.timestamp_millis_opt(id).unwrap();
    Task::new(TaskId::new(id), "alice", text, ts)
}

#[tokio::test]
async fn test_missing_document_lists_nothing() {
    let (store, _temp_dir) = create_test_store();
    assert!(store.list_tasks().await.unwrap().is_empty());
    assert!(store.find_user("alice", "secret").await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_then_list_contains_task_once() {
    let (store, _temp_dir) = create_test_store();
    let task = sample_task(1700000000000, "buy milk");

    let stored = store.create_task(task.clone().into()).await.unwrap();
    assert_eq!(stored, task);

    let tasks = store.list_tasks().await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks.iter().filter(|t| t.id == task.id).count(), 1);
    assert_eq!(tasks[0], task);
}

#[tokio::test]
async fn test_document_on_disk_uses_wire_format() {
    let (store, _temp_dir) = create_test_store();
    store
        .create_task(sample_task(1700000000000, "buy milk").into())
        .await
        .unwrap();

    let raw: serde_json::Value =
        serde_json::from_slice(&std::fs::read(store.path()).unwrap()).unwrap();
    assert_eq!(
        raw,
        json!({
            "tasks": [{
                "id": 1700000000000_i64,
                "author": "alice",
                "text": "buy milk",
                "completed": false,
                "createdAt": "2023-11-14T22:13:20.000Z",
                "updatedAt": "2023-11-14T22:13:20.000Z"
            }],
            "users": []
        })
    );
}

#[tokio::test]
async fn test_create_without_id_assigns_one() {
    let (store, _temp_dir) = create_test_store();
    store
        .create_task(sample_task(1700000000000, "first").into())
        .await
        .unwrap();

    let mut payload: NewTask = sample_task(1, "second").into();
    payload.id = None;
    let stored = store.create_task(payload).await.unwrap();

    assert!(stored.id > TaskId::new(1700000000000));
}

#[tokio::test]
async fn test_replace_missing_is_not_found_and_unchanged() {
    let (store, _temp_dir) = create_test_store();
    store.create_task(sample_task(1, "a").into()).await.unwrap();
    let before = store.list_tasks().await.unwrap();

    let err = store
        .replace_task(TaskId::new(999), sample_task(999, "x"))
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::NotFound { .. }));
    assert_eq!(store.list_tasks().await.unwrap(), before);
}

#[tokio::test]
async fn test_replace_preserves_order_and_size() {
    let (store, _temp_dir) = create_test_store();
    for (id, text) in [(1, "a"), (2, "b"), (3, "c")] {
        store.create_task(sample_task(id, text).into()).await.unwrap();
    }

    let mut replacement = sample_task(2, "B");
    replacement.completed = true;
    store
        .replace_task(TaskId::new(2), replacement.clone())
        .await
        .unwrap();

    let tasks = store.list_tasks().await.unwrap();
    assert_eq!(tasks.len(), 3);
    assert_eq!(tasks[1], replacement);
    assert_eq!(tasks[0].text, "a");
    assert_eq!(tasks[2].text, "c");
}

#[tokio::test]
async fn test_patch_merges_and_reports_missing() {
    let (store, _temp_dir) = create_test_store();
    store.create_task(sample_task(1, "a").into()).await.unwrap();

    let mut patch = Map::new();
    patch.insert("completed".into(), json!(true));
    let patched = store.patch_task(TaskId::new(1), patch).await.unwrap();
    assert!(patched.completed);
    assert_eq!(patched.text, "a");

    let err = store
        .patch_task(TaskId::new(2), Map::new())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_delete_removes_duplicates_and_is_idempotent() {
    let (store, _temp_dir) = create_test_store();
    store.create_task(sample_task(1, "a").into()).await.unwrap();
    store.create_task(sample_task(2, "b").into()).await.unwrap();
    store.create_task(sample_task(1, "dup").into()).await.unwrap();

    assert_eq!(store.delete_task(TaskId::new(1)).await.unwrap(), 2);
    let once = store.list_tasks().await.unwrap();

    assert_eq!(store.delete_task(TaskId::new(1)).await.unwrap(), 0);
    assert_eq!(store.list_tasks().await.unwrap(), once);
    assert_eq!(once.len(), 1);
}

#[tokio::test]
async fn test_initialize_seeds_users_and_refuses_overwrite() {
    let (store, _temp_dir) = create_test_store();
    store
        .initialize(vec![User::new("alice", "secret")], false)
        .await
        .unwrap();

    let user = store.find_user("alice", "secret").await.unwrap().unwrap();
    assert_eq!(user.username, "alice");
    assert!(store.find_user("alice", "").await.unwrap().is_none());
    assert!(store.find_user("", "secret").await.unwrap().is_none());

    let err = store.initialize(Vec::new(), false).await.unwrap_err();
    assert!(matches!(err, StorageError::AlreadyExists(_)));

    store.initialize(Vec::new(), true).await.unwrap();
    assert!(store.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_initialize_reports_unreadable_location() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();
    let store = JsonFileStore::new(blocker.join("db.json"));

    let err = store.initialize(Vec::new(), false).await.unwrap_err();
    assert!(matches!(err, StorageError::Read { .. }));
}

#[tokio::test]
async fn test_undated_tasks_load_and_survive_rewrites() {
    let (store, _temp_dir) = create_test_store();
    let undated = json!({ "id": 1, "author": "alice", "text": "x", "completed": false });
    std::fs::write(
        store.path(),
        serde_json::to_vec(&json!({
            "tasks": [undated],
            "users": [{ "id": 1, "username": "alice", "password": "secret" }]
        }))
        .unwrap(),
    )
    .unwrap();

    let tasks = store.list_tasks().await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert!(tasks[0].created_at.is_none());
    assert!(store.find_user("alice", "secret").await.unwrap().is_some());

    store.create_task(sample_task(2, "b").into()).await.unwrap();

    let raw: serde_json::Value =
        serde_json::from_slice(&std::fs::read(store.path()).unwrap()).unwrap();
    assert_eq!(raw["tasks"][0], undated);
}

#[tokio::test]
async fn test_corrupt_document_surfaces_as_storage_error() {
    let (store, _temp_dir) = create_test_store();
    std::fs::write(store.path(), b"{ not json").unwrap();

    let err = store.list_tasks().await.unwrap_err();
    assert!(matches!(err, CoreError::Storage(_)));
}

#[tokio::test]
async fn test_unknown_collections_survive_writes() {
    let (store, _temp_dir) = create_test_store();
    std::fs::write(
        store.path(),
        serde_json::to_vec(&json!({ "tasks": [], "users": [], "notes": ["keep me"] })).unwrap(),
    )
    .unwrap();

    store.create_task(sample_task(1, "a").into()).await.unwrap();

    let raw: serde_json::Value =
        serde_json::from_slice(&std::fs::read(store.path()).unwrap()).unwrap();
    assert_eq!(raw["notes"], json!(["keep me"]));
}

#[tokio::test]
async fn test_concurrent_creates_are_not_lost() {
    let (store, _temp_dir) = create_test_store();
    let store = Arc::new(store);

    let handles: Vec<_> = (1..=20)
        .map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                store
                    .create_task(sample_task(i, &format!("task {i}")).into())
                    .await
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(store.list_tasks().await.unwrap().len(), 20);
}
