use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::datetime::utc;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreateItemRequestDto {
    pub description: Option<String>,
}

/// Item created by another user in answer to a request.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestedItemDto {
    pub id: i32,
    pub name: String,
    pub owner_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequestDto {
    pub id: i32,
    pub description: String,
    #[serde(with = "utc")]
    pub created: DateTime<Utc>,
    pub items: Vec<RequestedItemDto>,
}
