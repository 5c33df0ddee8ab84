//! Item request domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::item_request::{CreateItemRequestDto, ItemRequestDto, RequestedItemDto},
    server::model::item::Item,
};

/// A user's request for an item nobody has listed yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRequest {
    pub id: i32,
    pub description: String,
    pub requester_id: i32,
    pub created: DateTime<Utc>,
}

impl ItemRequest {
    pub fn from_entity(entity: entity::item_request::Model) -> Self {
        Self {
            id: entity.id,
            description: entity.description,
            requester_id: entity.requester_id,
            created: entity.created,
        }
    }
}

/// Request together with the items other users listed in answer to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRequestWithItems {
    pub request: ItemRequest,
    pub items: Vec<Item>,
}

impl ItemRequestWithItems {
    pub fn into_dto(self) -> ItemRequestDto {
        ItemRequestDto {
            id: self.request.id,
            description: self.request.description,
            created: self.request.created,
            items: self
                .items
                .into_iter()
                .map(|item| RequestedItemDto {
                    id: item.id,
                    name: item.name,
                    owner_id: item.owner_id,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateItemRequestParam {
    pub requester_id: i32,
    pub description: Option<String>,
}

impl CreateItemRequestParam {
    pub fn from_dto(requester_id: i32, dto: CreateItemRequestDto) -> Self {
        Self {
            requester_id,
            description: dto.description,
        }
    }
}
