use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::ErrorDto,
        item_request::{CreateItemRequestDto, ItemRequestDto},
    },
    server::{
        controller::param::PageQuery,
        error::AppError,
        middleware::{
            auth::SharerUserId,
            extract::{AppJson, AppPath, AppQuery},
        },
        model::item_request::{CreateItemRequestParam, ItemRequestWithItems},
        service::item_request::ItemRequestService,
        state::AppState,
    },
};

/// Tag for grouping item request endpoints in OpenAPI documentation
pub static ITEM_REQUEST_TAG: &str = "item_request";

/// Post a request for an item.
#[utoipa::path(
    post,
    path = "/server/requests",
    tag = ITEM_REQUEST_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID")
    ),
    request_body = CreateItemRequestDto,
    responses(
        (status = 201, description = "Request posted", body = ItemRequestDto),
        (status = 400, description = "Blank description or bad header", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_request(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppJson(payload): AppJson<CreateItemRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemRequestService::new(&state.db);

    let request = service
        .create(
            CreateItemRequestParam::from_dto(user_id, payload),
            Utc::now(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(request.into_dto())))
}

/// List the acting user's own requests with the items offered in answer.
#[utoipa::path(
    get,
    path = "/server/requests",
    tag = ITEM_REQUEST_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "Own requests, newest first", body = Vec<ItemRequestDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_own_requests(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemRequestService::new(&state.db);

    let requests = service.get_own(user_id).await?;

    Ok((StatusCode::OK, Json(into_dtos(requests))))
}

/// Browse other users' requests.
#[utoipa::path(
    get,
    path = "/server/requests/all",
    tag = ITEM_REQUEST_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Other users' requests, newest first", body = Vec<ItemRequestDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_requests(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppQuery(query): AppQuery<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.into_page()?;

    let service = ItemRequestService::new(&state.db);

    let requests = service.get_all(user_id, page).await?;

    Ok((StatusCode::OK, Json(into_dtos(requests))))
}

/// Get a single request.
#[utoipa::path(
    get,
    path = "/server/requests/{request_id}",
    tag = ITEM_REQUEST_TAG,
    params(
        ("request_id" = i32, Path, description = "Item request ID"),
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "The request", body = ItemRequestDto),
        (status = 404, description = "User or request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_request(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppPath(request_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemRequestService::new(&state.db);

    let request = service.get(request_id, user_id).await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

fn into_dtos(requests: Vec<ItemRequestWithItems>) -> Vec<ItemRequestDto> {
    requests
        .into_iter()
        .map(ItemRequestWithItems::into_dto)
        .collect()
}
