//! Booking factory for creating test booking entities.
//!
//! Bookings are inserted directly, bypassing the booking engine's preconditions,
//! so tests can seed past, current and already-decided bookings.

use chrono::{DateTime, Duration, Utc};
use entity::booking::BookingStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::booking::BookingFactory;
///
/// let finished = BookingFactory::new(&db, item.id, booker.id)
///     .start(now - Duration::days(2))
///     .end(now - Duration::days(1))
///     .status(BookingStatus::Approved)
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    item_id: i32,
    booker_id: i32,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    status: BookingStatus,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - start: 1 hour from now
    /// - end: 2 hours from now
    /// - status: `WAITING`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `item_id` - ID of the booked item
    /// - `booker_id` - ID of the booking user
    pub fn new(db: &'a DatabaseConnection, item_id: i32, booker_id: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            item_id,
            booker_id,
            start: now + Duration::hours(1),
            end: now + Duration::hours(2),
            status: BookingStatus::Waiting,
        }
    }

    pub fn start(mut self, start: DateTime<Utc>) -> Self {
        self.start = start;
        self
    }

    pub fn end(mut self, end: DateTime<Utc>) -> Self {
        self.end = end;
        self
    }

    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::booking::Model)` - Created booking entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            start: ActiveValue::Set(self.start),
            end: ActiveValue::Set(self.end),
            item_id: ActiveValue::Set(self.item_id),
            booker_id: ActiveValue::Set(self.booker_id),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a WAITING booking one hour in the future with default values.
pub async fn create_booking(
    db: &DatabaseConnection,
    item_id: i32,
    booker_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, item_id, booker_id).build().await
}
