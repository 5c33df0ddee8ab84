//! Acting-user extraction.
//!
//! ShareIt has no sessions: the gateway passes the caller's user ID in the
//! `X-Sharer-User-Id` header and the server trusts it. Handlers take a [`SharerUserId`]
//! argument to require the header; ownership and booker checks happen in the services.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{
    model::api::USER_ID_HEADER,
    server::error::{auth::AuthError, AppError},
};

/// ID of the user on whose behalf the request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharerUserId(pub i32);

impl<S> FromRequestParts<S> for SharerUserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    /// Reads and parses the acting-user header.
    ///
    /// # Returns
    /// - `Ok(SharerUserId)` - Header present and numeric
    /// - `Err(AuthError::MissingUserHeader)` - Header absent
    /// - `Err(AuthError::InvalidUserHeader)` - Header not a valid i32
    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(USER_ID_HEADER)
            .ok_or(AuthError::MissingUserHeader)?;

        let text = value
            .to_str()
            .map_err(|_| AuthError::InvalidUserHeader(String::from_utf8_lossy(value.as_bytes()).into_owned()))?;

        let user_id = text
            .trim()
            .parse::<i32>()
            .map_err(|_| AuthError::InvalidUserHeader(text.to_string()))?;

        Ok(SharerUserId(user_id))
    }
}
