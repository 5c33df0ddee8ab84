//! Gateway error type and its HTTP mapping.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::{api::ErrorDto, booking::UnknownStateError},
    server::error::config::ConfigError,
};

#[derive(Error, Debug)]
pub enum GatewayError {
    /// Request rejected before forwarding.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// The booking server could not be reached or its response could not be read.
    ///
    /// Results in 502 Bad Gateway.
    #[error("Booking server request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Forwarding URL could not be built from the configured server URL.
    #[error("Invalid server URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Listener could not be bound or the server loop failed.
    #[error("Gateway I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<UnknownStateError> for GatewayError {
    fn from(err: UnknownStateError) -> Self {
        GatewayError::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for GatewayError {
    fn from(rejection: JsonRejection) -> Self {
        GatewayError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for GatewayError {
    fn from(rejection: QueryRejection) -> Self {
        GatewayError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for GatewayError {
    fn from(rejection: PathRejection) -> Self {
        GatewayError::BadRequest(rejection.body_text())
    }
}

/// Converts gateway errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 502 Bad Gateway - For `Upstream`
/// - 500 Internal Server Error - For `InvalidUrl`, `Config` and `Io`
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Upstream(err) => {
                tracing::error!("Booking server request failed: {}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    "Booking server unavailable".to_string(),
                )
            }
            err => {
                tracing::error!("{}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message,
            }),
        )
            .into_response()
    }
}
