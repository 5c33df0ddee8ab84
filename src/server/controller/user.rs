use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::extract::{AppJson, AppPath},
        model::user::{CreateUserParam, UpdateUserParam, User},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a user.
///
/// # Returns
/// - `201 Created` - User registered
/// - `400 Bad Request` - Blank name, blank or malformed email
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/server/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User registered", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.create(CreateUserParam::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// List all users.
#[utoipa::path(
    get,
    path = "/server/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let users = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(users.into_iter().map(User::into_dto).collect::<Vec<_>>()),
    ))
}

/// Get a user.
#[utoipa::path(
    get,
    path = "/server/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.get(user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update a user's name and/or email.
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Blank or malformed email
/// - `404 Not Found` - User not found
/// - `409 Conflict` - Email held by another user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/server/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service
        .update(UpdateUserParam::from_dto(user_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user and everything they own.
#[utoipa::path(
    delete,
    path = "/server/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    service.delete(user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
