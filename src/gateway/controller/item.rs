use axum::{
    extract::{RawQuery, State},
    http::{HeaderMap, Method},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::{
    gateway::{
        client::ForwardRequest,
        error::GatewayError,
        extract::{GatewayJson, GatewayPath, GatewayQuery},
        state::GatewayState,
        validate,
    },
    model::item::{CreateCommentDto, CreateItemDto, ItemDto, UpdateItemDto},
};

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub text: String,
}

pub async fn create_item(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    GatewayJson(payload): GatewayJson<CreateItemDto>,
) -> Result<Response, GatewayError> {
    validate::new_item(&payload)?;

    let request = ForwardRequest::new(Method::POST, "/server/items")
        .user(&headers)
        .json(&payload)?;

    state.server.forward(request).await
}

pub async fn update_item(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    GatewayPath(item_id): GatewayPath<i32>,
    GatewayJson(payload): GatewayJson<UpdateItemDto>,
) -> Result<Response, GatewayError> {
    let request = ForwardRequest::new(Method::PATCH, format!("/server/items/{}", item_id))
        .user(&headers)
        .json(&payload)?;

    state.server.forward(request).await
}

pub async fn get_item(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    GatewayPath(item_id): GatewayPath<i32>,
) -> Result<Response, GatewayError> {
    let request =
        ForwardRequest::new(Method::GET, format!("/server/items/{}", item_id)).user(&headers);

    state.server.forward(request).await
}

pub async fn get_items(
    State(state): State<GatewayState>,
    headers: HeaderMap,
) -> Result<Response, GatewayError> {
    let request = ForwardRequest::new(Method::GET, "/server/items").user(&headers);

    state.server.forward(request).await
}

/// Blank text is answered locally with an empty list.
pub async fn search_items(
    State(state): State<GatewayState>,
    GatewayQuery(search): GatewayQuery<SearchQuery>,
    RawQuery(query): RawQuery,
) -> Result<Response, GatewayError> {
    if search.text.trim().is_empty() {
        return Ok(Json(Vec::<ItemDto>::new()).into_response());
    }

    let request = ForwardRequest::new(Method::GET, "/server/items/search").query(query);

    state.server.forward(request).await
}

pub async fn add_comment(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    GatewayPath(item_id): GatewayPath<i32>,
    GatewayJson(payload): GatewayJson<CreateCommentDto>,
) -> Result<Response, GatewayError> {
    validate::comment(&payload)?;

    let request = ForwardRequest::new(Method::POST, format!("/server/items/{}/comment", item_id))
        .user(&headers)
        .json(&payload)?;

    state.server.forward(request).await
}
