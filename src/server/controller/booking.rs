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
        booking::{BookingDto, CreateBookingDto},
    },
    server::{
        controller::param::BookingListQuery,
        error::AppError,
        middleware::{
            auth::SharerUserId,
            extract::{AppJson, AppPath, AppQuery},
        },
        model::booking::{
            BookingDetails, BookingRole, CreateBookingParam, DecideBookingParam,
            ListBookingsParam,
        },
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DecisionQuery {
    /// `true` approves the booking, `false` rejects it.
    pub approved: bool,
}

/// Request a booking.
///
/// Creates a WAITING booking of an item for the acting user. The owner of the item
/// decides it later.
///
/// # Access Control
/// - Any existing user other than the item's owner
///
/// # Returns
/// - `201 Created` - Booking created in WAITING status
/// - `400 Bad Request` - Missing or invalid dates, unavailable item, self-booking, bad header
/// - `404 Not Found` - User or item not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/server/bookings",
    tag = BOOKING_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID")
    ),
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created", body = BookingDto),
        (status = 400, description = "Invalid booking request", body = ErrorDto),
        (status = 404, description = "User or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppJson(payload): AppJson<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db, &state.item_locks);

    let param = CreateBookingParam::from_dto(user_id, payload);

    let booking = service.create(param, Utc::now()).await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

/// Approve or reject a booking.
///
/// # Access Control
/// - Owner of the booked item only
///
/// # Returns
/// - `200 OK` - Booking decided
/// - `400 Bad Request` - Booking already decided, overlaps an approved booking, bad header
/// - `403 Forbidden` - Acting user is not the item owner
/// - `404 Not Found` - Booking or item not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/server/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID"),
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID"),
        DecisionQuery
    ),
    responses(
        (status = 200, description = "Booking decided", body = BookingDto),
        (status = 400, description = "Booking cannot be decided", body = ErrorDto),
        (status = 403, description = "Not the item owner", body = ErrorDto),
        (status = 404, description = "Booking or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn decide_booking(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppPath(booking_id): AppPath<i32>,
    AppQuery(query): AppQuery<DecisionQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db, &state.item_locks);

    let booking = service
        .decide(DecideBookingParam {
            booking_id,
            actor_id: user_id,
            approved: query.approved,
        })
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Get a booking.
///
/// # Access Control
/// - The booker or the owner of the booked item
///
/// # Returns
/// - `200 OK` - The booking
/// - `403 Forbidden` - Acting user is neither booker nor owner
/// - `404 Not Found` - Booking or item not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/server/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID"),
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "The booking", body = BookingDto),
        (status = 403, description = "Neither booker nor owner", body = ErrorDto),
        (status = 404, description = "Booking or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppPath(booking_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db, &state.item_locks);

    let booking = service.get(booking_id, user_id).await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// List bookings made by the acting user.
///
/// # Returns
/// - `200 OK` - Bookings matching the state filter, in filter order
/// - `400 Bad Request` - Unknown state, invalid pagination, bad header
/// - `404 Not Found` - User not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/server/bookings",
    tag = BOOKING_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID"),
        BookingListQuery
    ),
    responses(
        (status = 200, description = "Bookings of the user", body = Vec<BookingDto>),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppQuery(query): AppQuery<BookingListQuery>,
) -> Result<impl IntoResponse, AppError> {
    list(&state, user_id, BookingRole::Booker, query).await
}

/// List bookings of items owned by the acting user.
///
/// # Returns
/// - `200 OK` - Bookings matching the state filter, in filter order
/// - `400 Bad Request` - Unknown state, invalid pagination, bad header
/// - `404 Not Found` - User not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/server/bookings/owner",
    tag = BOOKING_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID"),
        BookingListQuery
    ),
    responses(
        (status = 200, description = "Bookings of the owner's items", body = Vec<BookingDto>),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owner_bookings(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    AppQuery(query): AppQuery<BookingListQuery>,
) -> Result<impl IntoResponse, AppError> {
    list(&state, user_id, BookingRole::Owner, query).await
}

async fn list(
    state: &AppState,
    user_id: i32,
    role: BookingRole,
    query: BookingListQuery,
) -> Result<(StatusCode, Json<Vec<BookingDto>>), AppError> {
    // State token is validated before the user lookup.
    let (booking_state, page) = query.parse()?;

    let service = BookingService::new(&state.db, &state.item_locks);

    let bookings = service
        .list(ListBookingsParam {
            user_id,
            role,
            state: booking_state,
            page,
            now: Utc::now(),
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(bookings.into_iter().map(BookingDetails::into_dto).collect()),
    ))
}
