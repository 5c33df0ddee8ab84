//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.

pub mod booking;
pub mod comment;
pub mod item;
pub mod item_request;
pub mod user;


use sea_orm::QuerySelect;

use crate::server::model::page::Page;

/// Applies offset pagination to a query.
///
/// SQLite rejects `OFFSET` without `LIMIT`, so an offset on an unbounded page gets the
/// largest limit SQLite accepts.
pub(crate) fn paginate<Q: QuerySelect>(query: Q, page: Page) -> Q {
    match (page.from, page.size) {
        (0, None) => query,
        (0, Some(size)) => query.limit(size),
        (from, size) => query.offset(from).limit(size.unwrap_or(i64::MAX as u64)),
    }
}
