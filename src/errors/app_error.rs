use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::courses::RepositoryError;

/// Errors surfaced to HTTP callers as `{success:false, message}`.
///
/// Remote inference failures are never represented here; the text generator
/// absorbs them before a handler sees a result.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Course store error: {0}")]
    Repository(#[from] RepositoryError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) | AppError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Unexpected failures are logged here and answered generically.
        let message = match &self {
            AppError::Internal(_) | AppError::Repository(_) => {
                tracing::error!(error = %self, "Unhandled error while serving request");
                "Server Error".to_string()
            }
            _ => self.to_string(),
        };

        let body = Json(json!({
            "success": false,
            "message": message,
        }));

        (status, body).into_response()
    }
}
