//! ShareIt: lend and borrow items between users.
//!
//! - `server` - The booking server, owner of all data and business rules
//! - `gateway` - Validating front door that forwards well-formed requests to the server
//! - `model` - DTOs shared by both processes

pub mod gateway;
pub mod model;
pub mod server;
