use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carries no acting-user header.
    ///
    /// Every booking, item and request route identifies the caller through the
    /// `X-Sharer-User-Id` header. Results in a 400 Bad Request response.
    #[error("Missing required header X-Sharer-User-Id")]
    MissingUserHeader,

    /// The acting-user header is present but is not a numeric id.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Invalid X-Sharer-User-Id header value: {0}")]
    InvalidUserHeader(String),

    /// The acting user lacks the relationship the operation requires.
    ///
    /// Raised when someone other than the item owner decides a booking, or when a user who
    /// is neither booker nor owner reads a booking. Results in a 403 Forbidden response.
    ///
    /// # Fields
    /// - ID of the user who was denied
    /// - Description of the denied action
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts identity and authorization errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For a missing or malformed acting-user header
/// - 403 Forbidden - For `AccessDenied`, with the denial reason in the body
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingUserHeader | Self::InvalidUserHeader(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(user_id, reason) => {
                tracing::debug!("Access denied for user {}: {}", user_id, reason);

                (StatusCode::FORBIDDEN, Json(ErrorDto { error: reason })).into_response()
            }
        }
    }
}
