//! Booking domain models and parameters.
//!
//! A booking is created WAITING by a user who is not the item's owner, and is decided
//! exactly once by the owner, becoming APPROVED or REJECTED. Its dates never change after
//! creation.

use chrono::{DateTime, Utc};

use crate::{
    model::booking::{
        BookedItemDto, BookerDto, BookingDto, BookingShortDto, BookingState, BookingStatusDto,
        CreateBookingDto,
    },
    server::model::{item::Item, page::Page, user::User},
};

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    /// Initial status, awaiting the owner's decision.
    Waiting,
    Approved,
    Rejected,
}

impl BookingStatus {
    /// Status a WAITING booking moves to for the given owner decision.
    pub fn decided(approved: bool) -> Self {
        if approved {
            BookingStatus::Approved
        } else {
            BookingStatus::Rejected
        }
    }

    pub fn from_entity(status: entity::booking::BookingStatus) -> Self {
        match status {
            entity::booking::BookingStatus::Waiting => BookingStatus::Waiting,
            entity::booking::BookingStatus::Approved => BookingStatus::Approved,
            entity::booking::BookingStatus::Rejected => BookingStatus::Rejected,
        }
    }

    pub fn into_entity(self) -> entity::booking::BookingStatus {
        match self {
            BookingStatus::Waiting => entity::booking::BookingStatus::Waiting,
            BookingStatus::Approved => entity::booking::BookingStatus::Approved,
            BookingStatus::Rejected => entity::booking::BookingStatus::Rejected,
        }
    }

    pub fn into_dto(self) -> BookingStatusDto {
        match self {
            BookingStatus::Waiting => BookingStatusDto::Waiting,
            BookingStatus::Approved => BookingStatusDto::Approved,
            BookingStatus::Rejected => BookingStatusDto::Rejected,
        }
    }
}

/// Persisted booking of an item over the half-open range `[start, end)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub item_id: i32,
    pub booker_id: i32,
    pub status: BookingStatus,
}

impl Booking {
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            start: entity.start,
            end: entity.end,
            item_id: entity.item_id,
            booker_id: entity.booker_id,
            status: BookingStatus::from_entity(entity.status),
        }
    }

    pub fn into_short_dto(self) -> BookingShortDto {
        BookingShortDto {
            id: self.id,
            booker_id: self.booker_id,
            start: self.start,
            end: self.end,
        }
    }
}

/// Booking enriched with its resolved item and booker, as returned by every engine operation.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDetails {
    pub booking: Booking,
    pub item: Item,
    pub booker: User,
}

impl BookingDetails {
    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.booking.id,
            start: self.booking.start,
            end: self.booking.end,
            status: self.booking.status.into_dto(),
            booker: BookerDto {
                id: self.booker.id,
                name: self.booker.name,
            },
            item: BookedItemDto {
                id: self.item.id,
                name: self.item.name,
            },
        }
    }
}

/// Parameters for requesting a booking.
///
/// Dates and item stay optional so that their absence is reported as the first
/// failing precondition of booking creation.
#[derive(Debug, Clone)]
pub struct CreateBookingParam {
    pub booker_id: i32,
    pub item_id: Option<i32>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl CreateBookingParam {
    pub fn from_dto(booker_id: i32, dto: CreateBookingDto) -> Self {
        Self {
            booker_id,
            item_id: dto.item_id,
            start: dto.start,
            end: dto.end,
        }
    }
}

/// Owner decision on a WAITING booking.
#[derive(Debug, Clone, Copy)]
pub struct DecideBookingParam {
    pub booking_id: i32,
    pub actor_id: i32,
    pub approved: bool,
}

/// Which side of the booking a listing is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingRole {
    /// Bookings the user made.
    Booker,
    /// Bookings of items the user owns.
    Owner,
}

/// Parameters for a state-filtered booking listing.
///
/// `now` is captured once by the caller so every predicate in the query is evaluated
/// against the same instant.
#[derive(Debug, Clone, Copy)]
pub struct ListBookingsParam {
    pub user_id: i32,
    pub role: BookingRole,
    pub state: BookingState,
    pub page: Page,
    pub now: DateTime<Utc>,
}
