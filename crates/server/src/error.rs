//! Error types for the HTTP surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, ServerError>;

/// Errors raised at the request or startup boundary.
#[derive(Error, Debug)]
pub enum ServerError {
    /// A required request field was absent.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The configured host and port do not form a socket address.
    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),

    /// Binding or serving failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::MissingField(_) => StatusCode::BAD_REQUEST,
            Self::InvalidAddress(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}
