//! HTTP routes of the booking server.
//!
//! Routes are registered through `OpenApiRouter` so that every handler's `#[utoipa::path]`
//! documentation is collected into one OpenAPI document, served by Swagger UI.

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{booking, item, item_request, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "ShareIt server", description = "Item sharing and booking API"),
    tags(
        (name = "user", description = "User registration and profiles"),
        (name = "item", description = "Items, search and comments"),
        (name = "booking", description = "Booking lifecycle"),
        (name = "item_request", description = "Requests for items")
    )
)]
struct ApiDoc;

/// Builds the server router with its state applied.
///
/// # Arguments
/// - `state` - Shared application state
///
/// # Returns
/// - `Router` - API routes, Swagger UI at `/swagger-ui` and request tracing
pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(user::create_user, user::get_users))
        .routes(routes!(user::get_user, user::update_user, user::delete_user))
        .routes(routes!(item::create_item, item::get_items))
        .routes(routes!(item::search_items))
        .routes(routes!(item::get_item, item::update_item))
        .routes(routes!(item::add_comment))
        .routes(routes!(booking::create_booking, booking::get_bookings))
        .routes(routes!(booking::get_owner_bookings))
        .routes(routes!(booking::get_booking, booking::decide_booking))
        .routes(routes!(
            item_request::create_request,
            item_request::get_own_requests
        ))
        .routes(routes!(item_request::get_all_requests))
        .routes(routes!(item_request::get_request))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
