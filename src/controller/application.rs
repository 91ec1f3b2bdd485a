use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::application::{CreateApplicationDto, UpdateApplicationStatusDto},
    service::application::ApplicationService,
    state::AppState,
};

/// POST /api/applications
/// Submit a new application for a task.
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<CreateApplicationDto>,
) -> Result<impl IntoResponse, AppError> {
    let application = ApplicationService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(application)))
}

/// GET /api/admin/applications
/// List all applications, most recent game dates first.
pub async fn list_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let applications = ApplicationService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(applications)))
}

/// PUT /api/admin/applications/{application_id}
/// Update the moderation status of an application.
pub async fn update_status(
    State(state): State<AppState>,
    Path(application_id): Path<i32>,
    Json(dto): Json<UpdateApplicationStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let application = ApplicationService::new(&state.db)
        .update_status(application_id, dto)
        .await?;

    Ok((StatusCode::OK, Json(application)))
}

/// DELETE /api/admin/applications/{application_id}
/// Delete an application.
pub async fn remove(
    State(state): State<AppState>,
    Path(application_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ApplicationService::new(&state.db)
        .delete(application_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
