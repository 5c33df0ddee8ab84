//! Body, query and path extractors whose rejections use the `ErrorDto` body.
//!
//! Axum's own `Json`, `Query` and `Path` reject with plain text (and 422 for a body that
//! parses as JSON but not as the target type). These wrappers route every rejection
//! through `AppError::BadRequest` instead.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::AppError;

/// JSON request body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
