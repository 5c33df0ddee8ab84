use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{booking::BookingShortDto, datetime::utc};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
    pub request_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

/// Item card. `last_booking` and `next_booking` are only filled in for the owner.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub request_id: Option<i32>,
    pub last_booking: Option<BookingShortDto>,
    pub next_booking: Option<BookingShortDto>,
    pub comments: Vec<CommentDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreateCommentDto {
    pub text: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i32,
    pub text: String,
    pub author_name: String,
    #[serde(with = "utc")]
    pub created: DateTime<Utc>,
}
