//! Extractors rejecting with `GatewayError::BadRequest` instead of axum's plain text.

use axum::extract::{FromRequest, FromRequestParts};

use crate::gateway::error::GatewayError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(GatewayError))]
pub struct GatewayJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(GatewayError))]
pub struct GatewayQuery<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(GatewayError))]
pub struct GatewayPath<T>(pub T);
