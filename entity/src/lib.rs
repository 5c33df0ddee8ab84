//! SeaORM entity models for the ShareIt database schema.
//!
//! Tables are created by the `migration` crate; test contexts build the same schema
//! directly from these entities.

pub mod prelude;

pub mod booking;
pub mod comment;
pub mod item;
pub mod item_request;
pub mod user;
