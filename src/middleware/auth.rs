use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

/// Header carrying the admin access key.
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Rejects requests whose `X-Admin-Key` header does not match the configured
/// admin key.
///
/// Services behind this middleware perform no authorization logic of their
/// own; this gate is the single admin capability check.
///
/// # Returns
/// - `Ok(Response)` - Key matched, request forwarded to the inner handler
/// - `Err(AppError::Forbidden)` - Header missing or key mismatch
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let provided = request
        .headers()
        .get(ADMIN_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    match provided {
        Some(key) if key == state.admin_key => Ok(next.run(request).await),
        _ => Err(AppError::Forbidden(
            "Access Forbidden: Admin key missing or invalid.".to_string(),
        )),
    }
}
