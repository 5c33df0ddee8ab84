use axum::{
    extract::{RawQuery, State},
    http::{HeaderMap, Method},
    response::Response,
};
use chrono::Utc;
use serde::Deserialize;

use crate::{
    gateway::{
        client::ForwardRequest,
        controller::ListQuery,
        error::GatewayError,
        extract::{GatewayJson, GatewayPath, GatewayQuery},
        state::GatewayState,
        validate,
    },
    model::booking::CreateBookingDto,
};

/// Raw decision flag, checked before forwarding.
#[derive(Debug, Default, Deserialize)]
pub struct DecisionQuery {
    pub approved: Option<String>,
}

pub async fn create_booking(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    GatewayJson(payload): GatewayJson<CreateBookingDto>,
) -> Result<Response, GatewayError> {
    validate::booking_request(&payload, Utc::now())?;

    let request = ForwardRequest::new(Method::POST, "/server/bookings")
        .user(&headers)
        .json(&payload)?;

    state.server.forward(request).await
}

pub async fn decide_booking(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    GatewayPath(booking_id): GatewayPath<i32>,
    GatewayQuery(decision): GatewayQuery<DecisionQuery>,
    RawQuery(query): RawQuery,
) -> Result<Response, GatewayError> {
    validate::decision(decision.approved.as_deref())?;

    let request = ForwardRequest::new(Method::PATCH, format!("/server/bookings/{}", booking_id))
        .user(&headers)
        .query(query);

    state.server.forward(request).await
}

pub async fn get_booking(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    GatewayPath(booking_id): GatewayPath<i32>,
) -> Result<Response, GatewayError> {
    let request = ForwardRequest::new(Method::GET, format!("/server/bookings/{}", booking_id))
        .user(&headers);

    state.server.forward(request).await
}

pub async fn get_bookings(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    GatewayQuery(list): GatewayQuery<ListQuery>,
    RawQuery(query): RawQuery,
) -> Result<Response, GatewayError> {
    forward_list(&state, "/server/bookings", &headers, list, query).await
}

pub async fn get_owner_bookings(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    GatewayQuery(list): GatewayQuery<ListQuery>,
    RawQuery(query): RawQuery,
) -> Result<Response, GatewayError> {
    forward_list(&state, "/server/bookings/owner", &headers, list, query).await
}

async fn forward_list(
    state: &GatewayState,
    path: &str,
    headers: &HeaderMap,
    list: ListQuery,
    query: Option<String>,
) -> Result<Response, GatewayError> {
    validate::booking_state(list.state.as_deref())?;
    validate::page(list.from, list.size)?;

    let request = ForwardRequest::new(Method::GET, path)
        .user(headers)
        .query(query);

    state.server.forward(request).await
}
