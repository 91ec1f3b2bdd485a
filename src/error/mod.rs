//! Error types and HTTP response handling.
//!
//! The `AppError` enum is the top-level error type. It wraps configuration
//! and database errors and implements `IntoResponse` so API endpoints can
//! return it directly. Every failure path reports a distinguishable kind;
//! nothing is retried.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{error::config::ConfigError, model::api::ErrorDto};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving. Startup only.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request failed validation: missing or malformed field, status value
    /// outside the fixed domain. Results in 400 Bad Request; no mutation has
    /// been performed.
    #[error("{0}")]
    Validation(String),

    /// Admin key missing or invalid. Results in 403 Forbidden.
    #[error("{0}")]
    Forbidden(String),

    /// Referenced record does not exist. Results in 404 Not Found.
    #[error("{0}")]
    NotFound(String),
}

/// Converts application errors into HTTP responses.
///
/// Internal errors are logged with full details but return a generic message
/// to avoid leaking implementation details.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Forbidden(msg) => {
                (StatusCode::FORBIDDEN, Json(ErrorDto { error: msg })).into_response()
            }
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error message, then returns a generic body to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
