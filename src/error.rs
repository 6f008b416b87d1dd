use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Recommendation service returned status {0}")]
    UpstreamStatus(u16),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Render(#[from] minijinja::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Status code used when this error escapes to an HTTP response
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::HttpClient(_) | AppError::UpstreamStatus(_) | AppError::Decode(_) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Render(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            AppError::InvalidInput(msg) | AppError::Internal(msg) => msg,
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
