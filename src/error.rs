use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    /// Request parts that fail type coercion, e.g. a non-numeric path id.
    #[error("{0}")]
    BadRequest(String),

    /// Raised by business handlers while the bug toggle is on.
    #[error("Internal Server Error: {0}")]
    InjectedFailure(String),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InjectedFailure(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::NotFound(msg) | AppError::BadRequest(msg) => {
                warn!(status = status.as_u16(), "{}", msg)
            }
            AppError::InjectedFailure(msg) => {
                error!(status = status.as_u16(), failure = %msg, "Injected failure")
            }
            AppError::Internal(err) => error!(status = status.as_u16(), error = ?err, "Unhandled error"),
        }
        error_response(status, self.to_string())
    }
}

/// Standard error body shared by handler errors, the 404 fallback and panics.
pub fn error_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(json!({
            "error": detail.into(),
            "status_code": status.as_u16(),
        })),
    )
        .into_response()
}
