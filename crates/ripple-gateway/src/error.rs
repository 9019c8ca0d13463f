use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// A stored target URL cannot be sent as a `Location` header.
    #[error("redirect target for {path} is not a valid header value")]
    InvalidRedirectTarget { path: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");
        match self {
            AppError::InvalidRedirectTarget { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error\n").into_response()
            }
        }
    }
}
