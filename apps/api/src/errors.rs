use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::manual::ManualError;
use crate::profiles::store::ProfileError;
use crate::render::RenderError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ProfileError> for AppError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::NotFound(_) => AppError::NotFound(err.to_string()),
            other => AppError::Internal(other.into()),
        }
    }
}

impl From<ManualError> for AppError {
    fn from(err: ManualError) -> Self {
        AppError::UnprocessableEntity(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::Render(e) => {
                tracing::error!("Render error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "RENDER_ERROR",
                    "Document rendering failed".to_string(),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (
                AppError::UnprocessableEntity("x".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                AppError::Render(RenderError::Exhausted { retries: 3 }),
                StatusCode::BAD_GATEWAY,
            ),
            (
                AppError::Internal(anyhow::anyhow!("boom")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_profile_not_found_maps_to_404() {
        let err: AppError = ProfileError::NotFound("Ghost".into()).into();
        assert!(matches!(err, AppError::NotFound(ref m) if m.contains("Ghost.json")));
    }

    #[test]
    fn test_manual_errors_are_unprocessable() {
        let err: AppError = ManualError::NoJsonObject.into();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}
