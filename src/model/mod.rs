//! Wire DTOs shared by the server and the gateway.
//!
//! JSON keys are camelCase and timestamps use the [`datetime`] format, matching
//! what ShareIt clients send and expect.

pub mod api;
pub mod booking;
pub mod datetime;
pub mod item;
pub mod item_request;
pub mod user;
