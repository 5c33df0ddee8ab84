//! Item domain models and parameters.

use crate::{
    model::item::{CreateItemDto, ItemDto, UpdateItemDto},
    server::model::{booking::Booking, comment::Comment},
};

/// Shareable item in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Whether the owner currently accepts new bookings.
    pub available: bool,
    pub owner_id: i32,
    /// Request this item was created in answer to, if any.
    pub request_id: Option<i32>,
}

impl Item {
    pub fn from_entity(entity: entity::item::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            available: entity.available,
            owner_id: entity.owner_id,
            request_id: entity.request_id,
        }
    }

    /// Converts a bare item to a DTO without booking summaries or comments.
    pub fn into_dto(self) -> ItemDto {
        ItemDetails {
            item: self,
            last_booking: None,
            next_booking: None,
            comments: Vec::new(),
        }
        .into_dto()
    }
}

/// Item card with its comments and, for the owner, the surrounding approved bookings.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDetails {
    pub item: Item,
    /// Latest approved booking that already ended.
    pub last_booking: Option<Booking>,
    /// Earliest approved booking that has not started yet.
    pub next_booking: Option<Booking>,
    pub comments: Vec<Comment>,
}

impl ItemDetails {
    pub fn into_dto(self) -> ItemDto {
        ItemDto {
            id: self.item.id,
            name: self.item.name,
            description: self.item.description,
            available: self.item.available,
            request_id: self.item.request_id,
            last_booking: self.last_booking.map(Booking::into_short_dto),
            next_booking: self.next_booking.map(Booking::into_short_dto),
            comments: self.comments.into_iter().map(Comment::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateItemParam {
    pub owner_id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
    pub request_id: Option<i32>,
}

impl CreateItemParam {
    pub fn from_dto(owner_id: i32, dto: CreateItemDto) -> Self {
        Self {
            owner_id,
            name: dto.name,
            description: dto.description,
            available: dto.available,
            request_id: dto.request_id,
        }
    }
}

/// Partial item update requested by `actor_id`. `None` leaves the field unchanged.
#[derive(Debug, Clone)]
pub struct UpdateItemParam {
    pub item_id: i32,
    pub actor_id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

impl UpdateItemParam {
    pub fn from_dto(item_id: i32, actor_id: i32, dto: UpdateItemDto) -> Self {
        Self {
            item_id,
            actor_id,
            name: dto.name,
            description: dto.description,
            available: dto.available,
        }
    }
}
