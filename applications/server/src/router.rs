/// Route table for both API variants
use crate::{
    api::{health, resources, tasks, users},
    config::ApiVariant,
    middleware,
    state::AppState,
};
use axum::{middleware as axum_middleware, routing::get, Router};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

/// Build the application router for the variant recorded in `app_state`
pub fn create_router(app_state: AppState) -> Router {
    let task_routes: Router<AppState> = match app_state.variant {
        ApiVariant::Generic => Router::new()
            .route(
                "/tasks",
                get(resources::list_tasks).post(resources::create_task),
            )
            .route(
                "/tasks/:id",
                get(resources::get_task)
                    .put(resources::replace_task)
                    .patch(resources::patch_task)
                    .delete(resources::delete_task),
            ),
        ApiVariant::Explicit => Router::new()
            .route("/tasks", get(tasks::list_tasks).post(tasks::create_task))
            .route(
                "/tasks/:id",
                get(tasks::get_task)
                    .put(tasks::replace_task)
                    .delete(tasks::delete_task),
            ),
    };

    Router::new()
        .route("/health", get(health::health))
        .route("/users", get(users::lookup_users))
        .merge(task_routes)
        .layer(axum_middleware::from_fn(middleware::options_short_circuit))
        .layer(middleware::cors_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .with_state(app_state)
}
