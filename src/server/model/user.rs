//! User domain models and parameters.
//!
//! Users are the identity store of the booking engine: every booking operation that names
//! a user first checks the user exists.

use crate::model::user::{CreateUserDto, UpdateUserDto, UserDto};

/// Registered user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Display name shown on bookings and comments.
    pub name: String,
    /// Unique contact email.
    pub email: String,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
        }
    }
}

/// Parameters for registering a user.
///
/// Fields stay optional until the service validates them so that a missing value
/// is reported as a validation failure rather than a deserialization error.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl CreateUserParam {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
        }
    }
}

/// Parameters for a partial user update. `None` leaves the field unchanged.
#[derive(Debug, Clone)]
pub struct UpdateUserParam {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UpdateUserParam {
    pub fn from_dto(id: i32, dto: UpdateUserDto) -> Self {
        Self {
            id,
            name: dto.name,
            email: dto.email,
        }
    }
}
