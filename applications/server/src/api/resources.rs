/// Generic REST routes over the task collection
///
/// Mirrors the conventions of a generic JSON REST router: bare resources in
/// responses, `201 Created` on create, `{}` on delete.
use super::parse_task_id;
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Map, Value};
use tasklist_core::{NewTask, Task};

fn not_found(raw_id: &str) -> ServerError {
    ServerError::NotFound(format!("Task not found: {}", raw_id))
}

/// GET /tasks
pub async fn list_tasks(State(app_state): State<AppState>) -> Result<Json<Vec<Task>>> {
    Ok(Json(app_state.store.list_tasks().await?))
}

/// GET /tasks/:id
pub async fn get_task(
    Path(raw_id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<Task>> {
    let id = parse_task_id(&raw_id).ok_or_else(|| not_found(&raw_id))?;
    app_state
        .store
        .get_task(id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(&raw_id))
}

/// POST /tasks
pub async fn create_task(
    State(app_state): State<AppState>,
    Json(payload): Json<NewTask>,
) -> Result<(StatusCode, Json<Task>)> {
    let task = app_state.store.create_task(payload).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// PUT /tasks/:id
pub async fn replace_task(
    Path(raw_id): Path<String>,
    State(app_state): State<AppState>,
    Json(payload): Json<NewTask>,
) -> Result<Json<Task>> {
    let id = parse_task_id(&raw_id).ok_or_else(|| not_found(&raw_id))?;
    let task = app_state
        .store
        .replace_task(id, payload.into_task(id))
        .await?;
    Ok(Json(task))
}

/// PATCH /tasks/:id
pub async fn patch_task(
    Path(raw_id): Path<String>,
    State(app_state): State<AppState>,
    Json(patch): Json<Map<String, Value>>,
) -> Result<Json<Task>> {
    let id = parse_task_id(&raw_id).ok_or_else(|| not_found(&raw_id))?;
    Ok(Json(app_state.store.patch_task(id, patch).await?))
}

/// DELETE /tasks/:id
///
/// Acknowledges whether or not anything matched.
pub async fn delete_task(
    Path(raw_id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<Value>> {
    if let Some(id) = parse_task_id(&raw_id) {
        app_state.store.delete_task(id).await?;
    }
    Ok(Json(json!({})))
}
