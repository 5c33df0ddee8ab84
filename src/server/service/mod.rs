//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing the booking lifecycle and the catalog rules
//! - **Authorization**: Deciding who may read or change a booking
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod booking;
pub mod item;
pub mod item_lock;
pub mod item_request;
pub mod user;

#[cfg(test)]
mod test;

use crate::server::error::AppError;

/// Unwraps a required text field, rejecting absent or whitespace-only values.
pub(crate) fn require_text(value: Option<String>, message: &str) -> Result<String, AppError> {
    value
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest(message.to_string()))
}
