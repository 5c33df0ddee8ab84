//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including unique value generation and convenience methods for creating
//! entities together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used for unique names and emails so factories can be called repeatedly
/// within a single test without tripping unique constraints.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an available item together with its owner.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, item))` - The owner and the created item
/// - `Err(DbErr)` - Database error during creation
pub async fn create_item_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::item::Model), DbErr> {
    let owner = crate::factory::user::create_user(db).await?;
    let item = crate::factory::item::create_item(db, owner.id).await?;

    Ok((owner, item))
}

/// Creates a complete booking hierarchy with all dependencies.
///
/// This is a convenience method that creates:
/// 1. Owner user
/// 2. Available item owned by the owner
/// 3. Booker user
/// 4. WAITING booking of the item by the booker, starting one hour from now
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, booker, item, booking))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::item::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let (owner, item) = create_item_with_owner(db).await?;
    let booker = crate::factory::user::create_user(db).await?;
    let booking = crate::factory::booking::create_booking(db, item.id, booker.id).await?;

    Ok((owner, booker, item, booking))
}
