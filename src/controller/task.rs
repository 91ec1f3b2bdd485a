use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError, model::task::CreateTaskDto, service::task::TaskService, state::AppState,
};

/// GET /api/tasks
/// List all tasks as summaries with application counts.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let tasks = TaskService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(tasks)))
}

/// GET /api/tasks/{task_id}
/// Get the detailed representation of one task.
pub async fn details(
    State(state): State<AppState>,
    Path(task_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let task = TaskService::new(&state.db).get(task_id).await?;

    Ok((StatusCode::OK, Json(task)))
}

/// POST /api/admin/tasks
/// Create a new task.
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<CreateTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let task = TaskService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(task)))
}

/// DELETE /api/admin/tasks/{task_id}
/// Delete a task, cascading deletion of its applications.
pub async fn remove(
    State(state): State<AppState>,
    Path(task_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    TaskService::new(&state.db).delete(task_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
