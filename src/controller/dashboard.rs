use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{error::AppError, service::dashboard::DashboardService, state::AppState};

/// GET /api/admin/dashboard
/// All dashboard aggregates, recomputed per request.
pub async fn metrics(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let dashboard = DashboardService::new(&state.db).metrics().await?;

    Ok((StatusCode::OK, Json(dashboard)))
}
