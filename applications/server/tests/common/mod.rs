/// Common test utilities and fixtures
use axum::{
    body::Body,
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tasklist_core::User;
use tasklist_server::{create_router, ApiVariant, AppState};
use tasklist_storage::JsonFileStore;
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Router over a fresh document in a temporary directory
pub async fn create_test_app(variant: ApiVariant) -> (Router, Arc<JsonFileStore>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(JsonFileStore::new(temp_dir.path().join("db.json")));
    store
        .initialize(
            vec![
                User::new(fixtures::TEST_USERNAME, fixtures::TEST_PASSWORD),
                User::new(fixtures::OTHER_USERNAME, fixtures::OTHER_PASSWORD),
            ],
            false,
        )
        .await
        .unwrap();

    let app = create_router(AppState::new(store.clone(), variant));
    (app, store, temp_dir)
}

/// Send one request and decode the JSON body (Null when empty)
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let response = send_raw(app, method, uri, body).await;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };
    app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
}

/// Test data
pub mod fixtures {
    use serde_json::{json, Value};

    pub const TEST_USERNAME: &str = "alice";
    pub const TEST_PASSWORD: &str = "secret";

    pub const OTHER_USERNAME: &str = "bob";
    pub const OTHER_PASSWORD: &str = "hunter2";

    pub const TASK_ID: i64 = 1700000000000;

    /// The task from the "buy milk" scenario
    pub fn milk_task() -> Value {
        json!({
            "id": TASK_ID,
            "author": TEST_USERNAME,
            "text": "buy milk",
            "completed": false,
            "createdAt": "2023-11-14T22:13:20.000Z",
            "updatedAt": "2023-11-14T22:13:20.000Z"
        })
    }
}
