//! Booking data repository for database operations.
//!
//! This module provides the `BookingRepository`, the query layer of the booking engine.
//! Temporal filters take `now` as an argument rather than reading the clock, so a whole
//! listing is classified against one instant.

use chrono::{DateTime, Utc};
use entity::booking::{BookingStatus as BookingStatusEntity, Column};
use sea_orm::{
    sea_query::Expr, ActiveEnum, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    DbErr, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Select,
};

use crate::{
    model::booking::BookingState,
    server::{
        data::paginate,
        model::{
            booking::{Booking, BookingStatus},
            page::Page,
        },
    },
};

/// Repository providing database operations for bookings.
pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    /// Creates a new BookingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BookingRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new booking in WAITING status.
    ///
    /// Performs no business validation; the booking engine checks dates, availability
    /// and ownership before calling this.
    ///
    /// # Arguments
    /// - `item_id` - ID of the booked item
    /// - `booker_id` - ID of the booking user
    /// - `start` - Inclusive start of the booked range
    /// - `end` - Exclusive end of the booked range
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created booking with its assigned ID
    /// - `Err(DbErr)` - Database error, including foreign key violations
    pub async fn create(
        &self,
        item_id: i32,
        booker_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Booking, DbErr> {
        let entity = entity::booking::ActiveModel {
            start: ActiveValue::Set(start),
            end: ActiveValue::Set(end),
            item_id: ActiveValue::Set(item_id),
            booker_id: ActiveValue::Set(booker_id),
            status: ActiveValue::Set(BookingStatusEntity::Waiting),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Booking::from_entity(entity))
    }

    /// Finds a booking by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - Booking found
    /// - `Ok(None)` - No booking with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Booking>, DbErr> {
        let entity = entity::prelude::Booking::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Booking::from_entity))
    }

    /// Moves a WAITING booking to `status` in a single compare-and-set update.
    ///
    /// The update only matches while the stored status is still WAITING, so of two
    /// concurrent decisions on the same booking exactly one succeeds.
    ///
    /// # Arguments
    /// - `id` - ID of the booking to decide
    /// - `status` - New status, APPROVED or REJECTED
    ///
    /// # Returns
    /// - `Ok(true)` - Status changed
    /// - `Ok(false)` - Booking missing or no longer WAITING; nothing changed
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_status_if_waiting(
        &self,
        id: i32,
        status: BookingStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .col_expr(
                Column::Status,
                Expr::value(status.into_entity().to_value()),
            )
            .filter(Column::Id.eq(id))
            .filter(Column::Status.eq(BookingStatusEntity::Waiting))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Gets one page of bookings made by a user, filtered and ordered by `state`.
    ///
    /// # Arguments
    /// - `booker_id` - ID of the booking user
    /// - `state` - Filter to apply, see [`filter_by_state`]
    /// - `now` - Instant the temporal filters are evaluated against
    /// - `page` - Offset pagination
    ///
    /// # Returns
    /// - `Ok(Vec<Booking>)` - Matching bookings in filter order
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_booker(
        &self,
        booker_id: i32,
        state: BookingState,
        now: DateTime<Utc>,
        page: Page,
    ) -> Result<Vec<Booking>, DbErr> {
        let query = entity::prelude::Booking::find().filter(Column::BookerId.eq(booker_id));

        let entities = paginate(filter_by_state(query, state, now), page)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Booking::from_entity).collect())
    }

    /// Gets one page of bookings of items owned by a user, filtered and ordered by `state`.
    ///
    /// Joins through the item table to scope bookings by `item.owner_id`.
    ///
    /// # Arguments
    /// - `owner_id` - ID of the owning user
    /// - `state` - Filter to apply, see [`filter_by_state`]
    /// - `now` - Instant the temporal filters are evaluated against
    /// - `page` - Offset pagination
    ///
    /// # Returns
    /// - `Ok(Vec<Booking>)` - Matching bookings in filter order
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_owner(
        &self,
        owner_id: i32,
        state: BookingState,
        now: DateTime<Utc>,
        page: Page,
    ) -> Result<Vec<Booking>, DbErr> {
        let query = entity::prelude::Booking::find()
            .join(JoinType::InnerJoin, entity::booking::Relation::Item.def())
            .filter(entity::item::Column::OwnerId.eq(owner_id));

        let entities = paginate(filter_by_state(query, state, now), page)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Booking::from_entity).collect())
    }

    /// Checks whether a user has an APPROVED booking of an item that ended before `now`.
    ///
    /// The comparison is strict: a booking ending exactly at `now` does not count.
    pub async fn exists_finished_approved(
        &self,
        booker_id: i32,
        item_id: i32,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Booking::find()
            .filter(Column::BookerId.eq(booker_id))
            .filter(Column::ItemId.eq(item_id))
            .filter(Column::Status.eq(BookingStatusEntity::Approved))
            .filter(Column::End.lt(now))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether `[start, end)` overlaps an APPROVED booking of the item.
    ///
    /// # Arguments
    /// - `item_id` - Item to check
    /// - `start` - Inclusive start of the candidate range
    /// - `end` - Exclusive end of the candidate range
    /// - `exclude_id` - Booking to ignore, normally the candidate itself
    pub async fn overlaps_approved(
        &self,
        item_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        exclude_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Booking::find()
            .filter(Column::ItemId.eq(item_id))
            .filter(Column::Id.ne(exclude_id))
            .filter(Column::Status.eq(BookingStatusEntity::Approved))
            .filter(Column::Start.lt(end))
            .filter(Column::End.gt(start))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the APPROVED booking of an item that ended most recently before `now`.
    pub async fn find_last_approved(
        &self,
        item_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Option<Booking>, DbErr> {
        let entity = entity::prelude::Booking::find()
            .filter(Column::ItemId.eq(item_id))
            .filter(Column::Status.eq(BookingStatusEntity::Approved))
            .filter(Column::End.lt(now))
            .order_by_desc(Column::End)
            .one(self.db)
            .await?;

        Ok(entity.map(Booking::from_entity))
    }

    /// Gets the APPROVED booking of an item that starts soonest after `now`.
    pub async fn find_next_approved(
        &self,
        item_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Option<Booking>, DbErr> {
        let entity = entity::prelude::Booking::find()
            .filter(Column::ItemId.eq(item_id))
            .filter(Column::Status.eq(BookingStatusEntity::Approved))
            .filter(Column::Start.gt(now))
            .order_by_asc(Column::Start)
            .one(self.db)
            .await?;

        Ok(entity.map(Booking::from_entity))
    }
}

/// Applies a state filter and its ordering to a booking query.
///
/// | state    | predicate               | order          |
/// |----------|-------------------------|----------------|
/// | ALL      | none                    | id desc        |
/// | CURRENT  | `start <= now < end`    | end desc       |
/// | PAST     | `end < now`             | end desc       |
/// | FUTURE   | `start > now`           | end desc       |
/// | WAITING  | status is WAITING       | end desc       |
/// | REJECTED | status is REJECTED      | end desc       |
///
/// Every ordering ends with id desc so ties come back in a stable order.
fn filter_by_state(
    query: Select<entity::booking::Entity>,
    state: BookingState,
    now: DateTime<Utc>,
) -> Select<entity::booking::Entity> {
    let query = match state {
        BookingState::All => query,
        BookingState::Current => query
            .filter(Column::Start.lte(now))
            .filter(Column::End.gt(now)),
        BookingState::Past => query.filter(Column::End.lt(now)),
        BookingState::Future => query.filter(Column::Start.gt(now)),
        BookingState::Waiting => query.filter(Column::Status.eq(BookingStatusEntity::Waiting)),
        BookingState::Rejected => query.filter(Column::Status.eq(BookingStatusEntity::Rejected)),
    };

    let query = match state {
        BookingState::All => query,
        _ => query.order_by_desc(Column::End),
    };

    query.order_by_desc(Column::Id)
}
