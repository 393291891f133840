/// Hand-written task handlers
///
/// Same operations as the generic routes, answered with `{ ok, task }`
/// envelopes.
use super::parse_task_id;
use crate::{
    error::{EnvelopeError, ServerError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use tasklist_core::{NewTask, Task};

type Result<T> = std::result::Result<T, EnvelopeError>;

#[derive(Debug, Serialize)]
pub struct TaskEnvelope {
    pub ok: bool,
    pub task: Task,
}

impl From<Task> for TaskEnvelope {
    fn from(task: Task) -> Self {
        Self { ok: true, task }
    }
}

fn not_found(raw_id: &str) -> EnvelopeError {
    ServerError::NotFound(format!("Task not found: {}", raw_id)).into()
}

/// GET /tasks
pub async fn list_tasks(State(app_state): State<AppState>) -> Result<Json<Vec<Task>>> {
    Ok(Json(app_state.store.list_tasks().await?))
}

/// GET /tasks/:id
pub async fn get_task(
    Path(raw_id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<TaskEnvelope>> {
    let id = parse_task_id(&raw_id).ok_or_else(|| not_found(&raw_id))?;
    let task = app_state
        .store
        .get_task(id)
        .await?
        .ok_or_else(|| not_found(&raw_id))?;
    Ok(Json(task.into()))
}

/// POST /tasks
pub async fn create_task(
    State(app_state): State<AppState>,
    Json(payload): Json<NewTask>,
) -> Result<Json<TaskEnvelope>> {
    let task = app_state.store.create_task(payload).await?;
    Ok(Json(task.into()))
}

/// PUT /tasks/:id
pub async fn replace_task(
    Path(raw_id): Path<String>,
    State(app_state): State<AppState>,
    Json(payload): Json<NewTask>,
) -> Result<Json<TaskEnvelope>> {
    let id = parse_task_id(&raw_id).ok_or_else(|| not_found(&raw_id))?;
    let task = app_state
        .store
        .replace_task(id, payload.into_task(id))
        .await?;
    Ok(Json(task.into()))
}

/// DELETE /tasks/:id
pub async fn delete_task(
    Path(raw_id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<Value>> {
    if let Some(id) = parse_task_id(&raw_id) {
        app_state.store.delete_task(id).await?;
    }
    Ok(Json(json!({ "ok": true })))
}
