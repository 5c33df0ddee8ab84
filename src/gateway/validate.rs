//! Request checks performed before anything is forwarded.
//!
//! Each check mirrors a server-side rule so that obviously malformed requests never leave
//! the gateway. The server repeats every check; passing here guarantees nothing.

use chrono::{DateTime, Duration, Utc};

use crate::{
    gateway::error::GatewayError,
    model::{
        booking::{BookingState, CreateBookingDto, START_TOLERANCE_SECONDS},
        item::{CreateCommentDto, CreateItemDto},
        item_request::CreateItemRequestDto,
        user::{is_valid_email, CreateUserDto, UpdateUserDto},
    },
};

fn require_text(value: Option<&str>, message: &str) -> Result<(), GatewayError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(()),
        _ => Err(GatewayError::BadRequest(message.to_string())),
    }
}

fn check_email(email: &str) -> Result<(), GatewayError> {
    if is_valid_email(email.trim()) {
        Ok(())
    } else {
        Err(GatewayError::BadRequest(format!("Invalid email: {}", email)))
    }
}

/// Booking request: item and both dates present, `start < end`, start not in the past.
pub fn booking_request(dto: &CreateBookingDto, now: DateTime<Utc>) -> Result<(), GatewayError> {
    if dto.item_id.is_none() {
        return Err(GatewayError::BadRequest("Item id is required".to_string()));
    }

    let (Some(start), Some(end)) = (dto.start, dto.end) else {
        return Err(GatewayError::BadRequest(
            "Booking start and end are required".to_string(),
        ));
    };

    if start >= end {
        return Err(GatewayError::BadRequest(
            "Booking start must be before its end".to_string(),
        ));
    }

    if start < now - Duration::seconds(START_TOLERANCE_SECONDS) {
        return Err(GatewayError::BadRequest(
            "Booking start must not be in the past".to_string(),
        ));
    }

    Ok(())
}

/// Decision flag: `approved` present and exactly `true` or `false`.
pub fn decision(approved: Option<&str>) -> Result<bool, GatewayError> {
    match approved {
        Some("true") => Ok(true),
        Some("false") => Ok(false),
        Some(other) => Err(GatewayError::BadRequest(format!(
            "Parameter approved must be true or false, got: {}",
            other
        ))),
        None => Err(GatewayError::BadRequest(
            "Parameter approved is required".to_string(),
        )),
    }
}

pub fn booking_state(state: Option<&str>) -> Result<BookingState, GatewayError> {
    Ok(BookingState::from_query(state)?)
}

/// Pagination: `from` at least 0, `size` at least 1 when given.
pub fn page(from: Option<i64>, size: Option<i64>) -> Result<(), GatewayError> {
    if let Some(from) = from.filter(|from| *from < 0) {
        return Err(GatewayError::BadRequest(format!(
            "Parameter from must not be negative, got {}",
            from
        )));
    }

    if let Some(size) = size.filter(|size| *size <= 0) {
        return Err(GatewayError::BadRequest(format!(
            "Parameter size must be positive, got {}",
            size
        )));
    }

    Ok(())
}

pub fn new_user(dto: &CreateUserDto) -> Result<(), GatewayError> {
    require_text(dto.name.as_deref(), "User name must not be blank")?;
    require_text(dto.email.as_deref(), "User email must not be blank")?;

    match dto.email.as_deref() {
        Some(email) => check_email(email),
        None => Ok(()),
    }
}

/// User update: every field optional, but a present email must be well-formed.
pub fn user_update(dto: &UpdateUserDto) -> Result<(), GatewayError> {
    match dto.email.as_deref() {
        Some(email) if email.trim().is_empty() => Err(GatewayError::BadRequest(
            "User email must not be blank".to_string(),
        )),
        Some(email) => check_email(email),
        None => Ok(()),
    }
}

pub fn new_item(dto: &CreateItemDto) -> Result<(), GatewayError> {
    require_text(dto.name.as_deref(), "Item name must not be blank")?;
    require_text(dto.description.as_deref(), "Item description must not be blank")?;

    if dto.available.is_none() {
        return Err(GatewayError::BadRequest(
            "Item availability is required".to_string(),
        ));
    }

    Ok(())
}

pub fn comment(dto: &CreateCommentDto) -> Result<(), GatewayError> {
    require_text(dto.text.as_deref(), "Comment text must not be blank")
}

pub fn item_request(dto: &CreateItemRequestDto) -> Result<(), GatewayError> {
    require_text(
        dto.description.as_deref(),
        "Request description must not be blank",
    )
}
