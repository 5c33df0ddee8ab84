//! HTTP handlers for the server API.
//!
//! Handlers read the acting user from the `X-Sharer-User-Id` header, convert DTOs into
//! service parameters, call one service operation and convert the result back into a DTO.
//! Every handler carries a `#[utoipa::path]` annotation collected into the OpenAPI document
//! by the router.

pub mod booking;
pub mod item;
pub mod item_request;
pub mod param;
pub mod user;
