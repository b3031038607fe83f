use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Ownership failures are deliberately reported as `NotFound` so callers
/// cannot probe for the existence of other users' records.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Malformed AI response: {0}")]
    MalformedAiResponse(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Persistence conflict: {0}")]
    PersistenceConflict(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::PersistenceConflict(db.message().to_string())
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => {
                AppError::UpstreamUnavailable(format!("storage: {e}"))
            }
            _ => AppError::Database(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // Caller mistakes: low severity, message passed through.
            AppError::NotFound(msg) => {
                tracing::warn!("Not found: {msg}");
                (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone())
            }
            AppError::InvalidInput(msg) => {
                tracing::warn!("Invalid input: {msg}");
                (StatusCode::BAD_REQUEST, "INVALID_INPUT", msg.clone())
            }
            // Dependency trouble: high severity, generic message to the caller.
            AppError::MalformedAiResponse(msg) => {
                tracing::error!("Malformed AI response: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MALFORMED_AI_RESPONSE",
                    "The AI provider returned an unreadable response. Please try again.".to_string(),
                )
            }
            AppError::UpstreamUnavailable(msg) => {
                tracing::error!("Upstream unavailable: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "UPSTREAM_UNAVAILABLE",
                    "A dependent service is unavailable. Please try again.".to_string(),
                )
            }
            AppError::PersistenceConflict(msg) => {
                tracing::error!("Persistence conflict: {msg}");
                (
                    StatusCode::CONFLICT,
                    "PERSISTENCE_CONFLICT",
                    "The request conflicted with existing data. Please try again.".to_string(),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
