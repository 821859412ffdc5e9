use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::common::response::ApiError;

/// Everything that can go wrong while running one synthesis job.
#[derive(Debug, Error)]
pub enum JobError {
    #[error("Invalid authorization token")]
    Unauthorized,

    #[error("Malformed request: {0}")]
    BadRequest(String),

    /// Child process could not be spawned or exited non-zero. The detail
    /// string (exit code, stderr) is logged server-side only.
    #[error("Inference failed: {0}")]
    InferenceFailed(String),

    /// The tool exited zero but wrote no video file under the output dir.
    #[error("Output video not found")]
    OutputNotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IntoResponse for JobError {
    fn into_response(self) -> Response {
        match self {
            JobError::Unauthorized => {
                ApiError("Invalid authorization token".to_string(), StatusCode::UNAUTHORIZED)
            }
            JobError::BadRequest(msg) => ApiError(msg, StatusCode::BAD_REQUEST),
            JobError::InferenceFailed(detail) => {
                error!("Error during inference: {}", detail);
                ApiError(
                    "Inference failed".to_string(),
                    StatusCode::INTERNAL_SERVER_ERROR,
                )
            }
            JobError::OutputNotFound => ApiError(
                "Output video not found".to_string(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            JobError::Io(e) => {
                error!("I/O error while processing job: {}", e);
                ApiError(
                    "Internal server error".to_string(),
                    StatusCode::INTERNAL_SERVER_ERROR,
                )
            }
        }
        .into_response()
    }
}
