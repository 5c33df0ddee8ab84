//! Validating gateway in front of the booking server.
//!
//! The gateway exposes the public routes without the `/server` prefix. It rejects malformed
//! requests with 400 before any network call and forwards the rest unchanged, relaying the
//! server's status and body back to the client. It holds no data of its own.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;
pub mod validate;
