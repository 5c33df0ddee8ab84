//! Booking lifecycle and authorization engine.
//!
//! `BookingService` owns every state transition of a booking. A booking is created WAITING
//! by a user who is not the item's owner and is decided exactly once by the owner. Checks
//! run in a fixed order and the first failure is reported:
//!
//! - input problems and rule violations become `AppError::BadRequest`
//! - missing users, items and bookings become `AppError::NotFound`
//! - acting on someone else's booking becomes `AuthError::AccessDenied`
//!
//! Creation and decisions hold the item's lock from `ItemLocks` between their checks and
//! their write, and the status change itself is a compare-and-set on WAITING.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::{
    model::booking::START_TOLERANCE_SECONDS,
    server::{
        data::{booking::BookingRepository, item::ItemRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::{
            booking::{
                Booking, BookingDetails, BookingRole, BookingStatus, CreateBookingParam,
                DecideBookingParam, ListBookingsParam,
            },
            item::Item,
            user::User,
        },
        service::item_lock::ItemLocks,
    },
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a ItemLocks,
}

impl<'a> BookingService<'a> {
    /// Creates a new BookingService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `locks` - Per-item lock table shared by every request
    ///
    /// # Returns
    /// - `BookingService` - New service instance
    pub fn new(db: &'a DatabaseConnection, locks: &'a ItemLocks) -> Self {
        Self { db, locks }
    }

    /// Requests a booking of an item.
    ///
    /// Preconditions, first failure wins:
    /// 1. item, start and end present
    /// 2. `start < end`
    /// 3. `start` no earlier than one minute before `now`
    /// 4. booker exists
    /// 5. item exists
    /// 6. item is available
    /// 7. booker is not the item's owner
    ///
    /// # Arguments
    /// - `param` - Booker, item and requested range
    /// - `now` - Instant the start date is checked against
    ///
    /// # Returns
    /// - `Ok(BookingDetails)` - The new WAITING booking with its item and booker
    /// - `Err(AppError::BadRequest)` - Missing or invalid dates, unavailable item, self-booking
    /// - `Err(AppError::NotFound)` - Booker or item does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(
        &self,
        param: CreateBookingParam,
        now: DateTime<Utc>,
    ) -> Result<BookingDetails, AppError> {
        let (item_id, start, end) = match (param.item_id, param.start, param.end) {
            (Some(item_id), Some(start), Some(end)) => (item_id, start, end),
            (None, _, _) => return Err(AppError::BadRequest("Item id is required".to_string())),
            _ => {
                return Err(AppError::BadRequest(
                    "Booking start and end are required".to_string(),
                ))
            }
        };

        if start >= end {
            tracing::warn!(
                "Rejected booking of item {} by user {}: start {} is not before end {}",
                item_id,
                param.booker_id,
                start,
                end
            );
            return Err(AppError::BadRequest(
                "Booking start must be before its end".to_string(),
            ));
        }

        if start < now - Duration::seconds(START_TOLERANCE_SECONDS) {
            tracing::warn!(
                "Rejected booking of item {} by user {}: start {} is in the past",
                item_id,
                param.booker_id,
                start
            );
            return Err(AppError::BadRequest(
                "Booking start must not be in the past".to_string(),
            ));
        }

        let booker = self.find_user(param.booker_id).await?;

        let _guard = self.locks.acquire(item_id).await;

        let item = self.find_item(item_id).await?;

        if !item.available {
            tracing::warn!(
                "Rejected booking of item {} by user {}: item is not available",
                item.id,
                booker.id
            );
            return Err(AppError::BadRequest(format!(
                "Item {} is not available for booking",
                item.id
            )));
        }

        if item.owner_id == booker.id {
            tracing::warn!(
                "Rejected booking of item {} by its owner {}",
                item.id,
                booker.id
            );
            return Err(AppError::BadRequest(
                "Owner cannot book their own item".to_string(),
            ));
        }

        let booking = BookingRepository::new(self.db)
            .create(item.id, booker.id, start, end)
            .await?;

        tracing::info!(
            "User {} requested booking {} of item {}",
            booker.id,
            booking.id,
            item.id
        );

        Ok(BookingDetails {
            booking,
            item,
            booker,
        })
    }

    /// Approves or rejects a WAITING booking on behalf of the item's owner.
    ///
    /// Preconditions, first failure wins:
    /// 1. booking exists
    /// 2. booked item exists
    /// 3. actor is the item's owner
    /// 4. booking is WAITING
    /// 5. when approving, no other APPROVED booking of the item overlaps this one
    ///
    /// A decision never repeats: deciding a booking that already left WAITING fails even
    /// when the new decision matches the stored one.
    ///
    /// # Returns
    /// - `Ok(BookingDetails)` - The decided booking
    /// - `Err(AppError::NotFound)` - Booking, item or booker does not exist
    /// - `Err(AppError::AuthErr)` - Actor is not the item's owner
    /// - `Err(AppError::BadRequest)` - Booking already decided or overlapping an approved one
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn decide(&self, param: DecideBookingParam) -> Result<BookingDetails, AppError> {
        let repo = BookingRepository::new(self.db);

        let booking = self.find_booking(param.booking_id).await?;
        let item = self.find_item(booking.item_id).await?;

        if item.owner_id != param.actor_id {
            tracing::warn!(
                "User {} tried to decide booking {} of item {} owned by {}",
                param.actor_id,
                booking.id,
                item.id,
                item.owner_id
            );
            return Err(AuthError::AccessDenied(
                param.actor_id,
                "Only the item owner can approve or reject a booking".to_string(),
            )
            .into());
        }

        if booking.status != BookingStatus::Waiting {
            return Err(already_decided(&booking));
        }

        let _guard = self.locks.acquire(item.id).await;

        if param.approved
            && repo
                .overlaps_approved(item.id, booking.start, booking.end, booking.id)
                .await?
        {
            tracing::warn!(
                "Rejected approval of booking {}: overlaps an approved booking of item {}",
                booking.id,
                item.id
            );
            return Err(AppError::BadRequest(
                "Booking overlaps an already approved booking of this item".to_string(),
            ));
        }

        let status = BookingStatus::decided(param.approved);
        if !repo.update_status_if_waiting(booking.id, status).await? {
            // Another decision landed between the read and the update.
            return Err(already_decided(&booking));
        }

        tracing::info!(
            "Owner {} set booking {} of item {} to {:?}",
            param.actor_id,
            booking.id,
            item.id,
            status
        );

        let booker = self.find_user(booking.booker_id).await?;

        Ok(BookingDetails {
            booking: Booking { status, ..booking },
            item,
            booker,
        })
    }

    /// Gets a booking visible to its booker or to the booked item's owner.
    ///
    /// # Returns
    /// - `Ok(BookingDetails)` - The booking with its item and booker
    /// - `Err(AppError::NotFound)` - Booking or item does not exist
    /// - `Err(AppError::AuthErr)` - Actor is neither booker nor owner
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get(&self, booking_id: i32, actor_id: i32) -> Result<BookingDetails, AppError> {
        let booking = self.find_booking(booking_id).await?;
        let item = self.find_item(booking.item_id).await?;

        if actor_id != booking.booker_id && actor_id != item.owner_id {
            tracing::warn!(
                "User {} tried to read booking {} without being booker or owner",
                actor_id,
                booking.id
            );
            return Err(AuthError::AccessDenied(
                actor_id,
                "Only the booker or the item owner can view a booking".to_string(),
            )
            .into());
        }

        let booker = self.find_user(booking.booker_id).await?;

        Ok(BookingDetails {
            booking,
            item,
            booker,
        })
    }

    /// Lists a user's bookings as booker or as owner, filtered by state.
    ///
    /// Every temporal predicate is evaluated against `param.now`. Items and bookers of
    /// the page are loaded with one query each.
    ///
    /// # Returns
    /// - `Ok(Vec<BookingDetails>)` - Matching bookings in filter order
    /// - `Err(AppError::NotFound)` - User does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list(&self, param: ListBookingsParam) -> Result<Vec<BookingDetails>, AppError> {
        if !UserRepository::new(self.db).exists(param.user_id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let repo = BookingRepository::new(self.db);
        let bookings = match param.role {
            BookingRole::Booker => {
                repo.get_by_booker(param.user_id, param.state, param.now, param.page)
                    .await?
            }
            BookingRole::Owner => {
                repo.get_by_owner(param.user_id, param.state, param.now, param.page)
                    .await?
            }
        };

        self.with_details(bookings).await
    }

    /// Checks whether a user may comment on an item.
    ///
    /// True when the user has an APPROVED booking of the item whose end is strictly
    /// before `now`.
    pub async fn can_comment(
        &self,
        user_id: i32,
        item_id: i32,
        now: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let eligible = BookingRepository::new(self.db)
            .exists_finished_approved(user_id, item_id, now)
            .await?;

        Ok(eligible)
    }

    async fn with_details(&self, bookings: Vec<Booking>) -> Result<Vec<BookingDetails>, AppError> {
        let mut item_ids: Vec<i32> = bookings.iter().map(|b| b.item_id).collect();
        item_ids.sort_unstable();
        item_ids.dedup();

        let mut booker_ids: Vec<i32> = bookings.iter().map(|b| b.booker_id).collect();
        booker_ids.sort_unstable();
        booker_ids.dedup();

        let items: HashMap<i32, Item> = ItemRepository::new(self.db)
            .find_by_ids(&item_ids)
            .await?
            .into_iter()
            .map(|item| (item.id, item))
            .collect();
        let bookers: HashMap<i32, User> = UserRepository::new(self.db)
            .find_by_ids(&booker_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect();

        bookings
            .into_iter()
            .map(|booking| {
                let item = items.get(&booking.item_id).cloned().ok_or_else(|| {
                    AppError::InternalError(format!(
                        "Item {} of booking {} missing",
                        booking.item_id, booking.id
                    ))
                })?;
                let booker = bookers.get(&booking.booker_id).cloned().ok_or_else(|| {
                    AppError::InternalError(format!(
                        "Booker {} of booking {} missing",
                        booking.booker_id, booking.id
                    ))
                })?;

                Ok(BookingDetails {
                    booking,
                    item,
                    booker,
                })
            })
            .collect()
    }

    async fn find_booking(&self, booking_id: i32) -> Result<Booking, AppError> {
        BookingRepository::new(self.db)
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))
    }

    async fn find_item(&self, item_id: i32) -> Result<Item, AppError> {
        ItemRepository::new(self.db)
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))
    }

    async fn find_user(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}

fn already_decided(booking: &Booking) -> AppError {
    tracing::warn!(
        "Rejected decision on booking {}: no longer WAITING",
        booking.id
    );
    AppError::BadRequest(format!("Booking {} has already been decided", booking.id))
}
