use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError, model::window::CreateWindowDto, service::window::WindowService,
    state::AppState,
};

/// GET /api/windows
/// List all availability windows, soonest first.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let windows = WindowService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(windows)))
}

/// POST /api/admin/windows
/// Create a new availability window.
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<CreateWindowDto>,
) -> Result<impl IntoResponse, AppError> {
    let window = WindowService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(window)))
}

/// DELETE /api/admin/windows/{window_id}
/// Delete an availability window.
pub async fn remove(
    State(state): State<AppState>,
    Path(window_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    WindowService::new(&state.db).delete(window_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
