use axum::{
    extract::{RawQuery, State},
    http::{HeaderMap, Method},
    response::Response,
};

use crate::{
    gateway::{
        client::ForwardRequest,
        controller::ListQuery,
        error::GatewayError,
        extract::{GatewayJson, GatewayPath, GatewayQuery},
        state::GatewayState,
        validate,
    },
    model::item_request::CreateItemRequestDto,
};

pub async fn create_request(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    GatewayJson(payload): GatewayJson<CreateItemRequestDto>,
) -> Result<Response, GatewayError> {
    validate::item_request(&payload)?;

    let request = ForwardRequest::new(Method::POST, "/server/requests")
        .user(&headers)
        .json(&payload)?;

    state.server.forward(request).await
}

pub async fn get_own_requests(
    State(state): State<GatewayState>,
    headers: HeaderMap,
) -> Result<Response, GatewayError> {
    let request = ForwardRequest::new(Method::GET, "/server/requests").user(&headers);

    state.server.forward(request).await
}

pub async fn get_all_requests(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    GatewayQuery(list): GatewayQuery<ListQuery>,
    RawQuery(query): RawQuery,
) -> Result<Response, GatewayError> {
    validate::page(list.from, list.size)?;

    let request = ForwardRequest::new(Method::GET, "/server/requests/all")
        .user(&headers)
        .query(query);

    state.server.forward(request).await
}

pub async fn get_request(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    GatewayPath(request_id): GatewayPath<i32>,
) -> Result<Response, GatewayError> {
    let request = ForwardRequest::new(Method::GET, format!("/server/requests/{}", request_id))
        .user(&headers);

    state.server.forward(request).await
}
