//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources needed by the
//! server. The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Per-item locks serializing booking writes against the same item

use sea_orm::DatabaseConnection;

use crate::server::service::item_lock::ItemLocks;

/// Application state containing shared resources and dependencies.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a connection pool whose clones
/// share the pool, and `ItemLocks` wraps its map in an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Serializes booking creation and decisions per item.
    ///
    /// Shared by every request so that two requests touching the same item wait for
    /// each other between the availability/overlap checks and the write.
    pub item_locks: ItemLocks,
}

impl AppState {
    /// Creates a new application state around the given database connection.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    ///
    /// # Returns
    /// - `AppState` - Initialized application state with an empty lock table
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            item_locks: ItemLocks::default(),
        }
    }
}
