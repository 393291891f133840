/// User lookup API route
use crate::{error::Result, state::AppState};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tasklist_core::User;

/// Credentials to match; a missing parameter counts as the empty string
#[derive(Debug, Deserialize)]
pub struct UserQuery {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// GET /users?username=&password=
///
/// Answers with an array holding the matching user, or an empty array. The
/// array shape is what clients of the generic router expect.
pub async fn lookup_users(
    State(app_state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<Vec<User>>> {
    let user = app_state
        .store
        .find_user(&query.username, &query.password)
        .await?;

    if user.is_none() {
        tracing::info!(username = %query.username, "User lookup found no match");
    }

    Ok(Json(user.into_iter().collect()))
}
