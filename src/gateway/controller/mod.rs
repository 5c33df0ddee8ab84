//! Gateway handlers: validate, then forward to the matching `/server` route.

pub mod booking;
pub mod item;
pub mod item_request;
pub mod user;

use serde::Deserialize;

/// Listing query inspected by the gateway and then forwarded verbatim.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub state: Option<String>,
    pub from: Option<i64>,
    pub size: Option<i64>,
}
