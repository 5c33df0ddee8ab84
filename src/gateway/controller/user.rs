use axum::{extract::State, http::Method, response::Response};

use crate::{
    gateway::{
        client::ForwardRequest,
        error::GatewayError,
        extract::{GatewayJson, GatewayPath},
        state::GatewayState,
        validate,
    },
    model::user::{CreateUserDto, UpdateUserDto},
};

pub async fn create_user(
    State(state): State<GatewayState>,
    GatewayJson(payload): GatewayJson<CreateUserDto>,
) -> Result<Response, GatewayError> {
    validate::new_user(&payload)?;

    let request = ForwardRequest::new(Method::POST, "/server/users").json(&payload)?;

    state.server.forward(request).await
}

pub async fn get_users(State(state): State<GatewayState>) -> Result<Response, GatewayError> {
    state
        .server
        .forward(ForwardRequest::new(Method::GET, "/server/users"))
        .await
}

pub async fn get_user(
    State(state): State<GatewayState>,
    GatewayPath(user_id): GatewayPath<i32>,
) -> Result<Response, GatewayError> {
    state
        .server
        .forward(ForwardRequest::new(
            Method::GET,
            format!("/server/users/{}", user_id),
        ))
        .await
}

pub async fn update_user(
    State(state): State<GatewayState>,
    GatewayPath(user_id): GatewayPath<i32>,
    GatewayJson(payload): GatewayJson<UpdateUserDto>,
) -> Result<Response, GatewayError> {
    validate::user_update(&payload)?;

    let request = ForwardRequest::new(Method::PATCH, format!("/server/users/{}", user_id))
        .json(&payload)?;

    state.server.forward(request).await
}

pub async fn delete_user(
    State(state): State<GatewayState>,
    GatewayPath(user_id): GatewayPath<i32>,
) -> Result<Response, GatewayError> {
    state
        .server
        .forward(ForwardRequest::new(
            Method::DELETE,
            format!("/server/users/{}", user_id),
        ))
        .await
}
