use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        item::{CommentDto, CreateCommentDto, CreateItemDto, ItemDto, UpdateItemDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::SharerUserId,
            extract::{AppJson, AppPath, AppQuery},
        },
        model::{
            comment::CreateCommentParam,
            item::{CreateItemParam, Item, ItemDetails, UpdateItemParam},
        },
        service::item::ItemService,
        state::AppState,
    },
};

/// Tag for grouping item endpoints in OpenAPI documentation
pub static ITEM_TAG: &str = "item";

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Text to look for in item names and descriptions.
    #[serde(default)]
    pub text: String,
}

/// List a new item owned by the acting user.
///
/// # Returns
/// - `201 Created` - Item created
/// - `400 Bad Request` - Blank name or description, missing availability, bad header
/// - `404 Not Found` - User or referenced request not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/server/items",
    tag = ITEM_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID")
    ),
    request_body = CreateItemDto,
    responses(
        (status = 201, description = "Item created", body = ItemDto),
        (status = 400, description = "Invalid item data", body = ErrorDto),
        (status = 404, description = "User or request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_item(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppJson(payload): AppJson<CreateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db, &state.item_locks);

    let item = service
        .create(CreateItemParam::from_dto(user_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

/// Update an item owned by the acting user.
///
/// # Returns
/// - `200 OK` - Updated item
/// - `404 Not Found` - Item not found or not owned by the acting user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/server/items/{item_id}",
    tag = ITEM_TAG,
    params(
        ("item_id" = i32, Path, description = "Item ID"),
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID")
    ),
    request_body = UpdateItemDto,
    responses(
        (status = 200, description = "Updated item", body = ItemDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_item(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppPath(item_id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db, &state.item_locks);

    let item = service
        .update(UpdateItemParam::from_dto(item_id, user_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Get an item card.
///
/// Comments are always included; last and next approved bookings only for the owner.
#[utoipa::path(
    get,
    path = "/server/items/{item_id}",
    tag = ITEM_TAG,
    params(
        ("item_id" = i32, Path, description = "Item ID"),
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "The item", body = ItemDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_item(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppPath(item_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db, &state.item_locks);

    let item = service.get(item_id, user_id, Utc::now()).await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// List the acting user's items.
#[utoipa::path(
    get,
    path = "/server/items",
    tag = ITEM_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "Items of the owner", body = Vec<ItemDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_items(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db, &state.item_locks);

    let items = service.get_by_owner(user_id, Utc::now()).await?;

    Ok((
        StatusCode::OK,
        Json(
            items
                .into_iter()
                .map(ItemDetails::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Search available items by text.
#[utoipa::path(
    get,
    path = "/server/items/search",
    tag = ITEM_TAG,
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching available items", body = Vec<ItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_items(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db, &state.item_locks);

    let items = service.search(&query.text).await?;

    Ok((
        StatusCode::OK,
        Json(items.into_iter().map(Item::into_dto).collect::<Vec<_>>()),
    ))
}

/// Comment on an item after a finished approved booking of it.
///
/// # Returns
/// - `201 Created` - Comment stored
/// - `400 Bad Request` - Blank text, no finished approved booking, bad header
/// - `404 Not Found` - Item or user not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/server/items/{item_id}/comment",
    tag = ITEM_TAG,
    params(
        ("item_id" = i32, Path, description = "Item ID"),
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment stored", body = CommentDto),
        (status = 400, description = "Comment not allowed", body = ErrorDto),
        (status = 404, description = "Item or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_comment(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppPath(item_id): AppPath<i32>,
    AppJson(payload): AppJson<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db, &state.item_locks);

    let comment = service
        .add_comment(
            CreateCommentParam::from_dto(item_id, user_id, payload),
            Utc::now(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}
