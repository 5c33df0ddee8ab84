use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::gateway::{
    controller::{booking, item, item_request, user},
    state::GatewayState,
};

/// Builds the public gateway router.
///
/// Paths mirror the server's without the `/server` prefix.
pub fn router(state: GatewayState) -> Router {
    Router::new()
        .route("/users", post(user::create_user).get(user::get_users))
        .route(
            "/users/{user_id}",
            get(user::get_user)
                .patch(user::update_user)
                .delete(user::delete_user),
        )
        .route("/items", post(item::create_item).get(item::get_items))
        .route("/items/search", get(item::search_items))
        .route(
            "/items/{item_id}",
            get(item::get_item).patch(item::update_item),
        )
        .route("/items/{item_id}/comment", post(item::add_comment))
        .route(
            "/bookings",
            post(booking::create_booking).get(booking::get_bookings),
        )
        .route("/bookings/owner", get(booking::get_owner_bookings))
        .route(
            "/bookings/{booking_id}",
            get(booking::get_booking).patch(booking::decide_booking),
        )
        .route(
            "/requests",
            post(item_request::create_request).get(item_request::get_own_requests),
        )
        .route("/requests/all", get(item_request::get_all_requests))
        .route("/requests/{request_id}", get(item_request::get_request))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
