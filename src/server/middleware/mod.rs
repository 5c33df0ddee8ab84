//! Request extractors shared by the server's controllers.

pub mod auth;
pub mod extract;
