use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    controller::{application, dashboard, task, window},
    middleware::auth::require_admin,
    state::AppState,
};

pub fn router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/tasks", get(task::list))
        .route("/api/tasks/{task_id}", get(task::details))
        .route("/api/applications", post(application::create))
        .route("/api/windows", get(window::list));

    let admin_routes = Router::new()
        .route("/api/admin/tasks", post(task::create))
        .route("/api/admin/tasks/{task_id}", delete(task::remove))
        .route("/api/admin/dashboard", get(dashboard::metrics))
        .route("/api/admin/applications", get(application::list_all))
        .route(
            "/api/admin/applications/{application_id}",
            put(application::update_status).delete(application::remove),
        )
        .route("/api/admin/windows", post(window::create))
        .route("/api/admin/windows/{window_id}", delete(window::remove))
        .layer(from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
