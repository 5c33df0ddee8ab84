//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of the rows they reference, and the
//! helpers in [`helpers`] create whole dependency chains at once.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let owner = factory::user::create_user(&db).await?;
//!     let item = factory::item::create_item(&db, owner.id).await?;
//!
//!     // Create with all dependencies
//!     let (owner, booker, item, booking) =
//!         factory::helpers::create_booking_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use entity::booking::BookingStatus;
//! use test_utils::factory::booking::BookingFactory;
//!
//! let booking = BookingFactory::new(&db, item.id, booker.id)
//!     .start(now - Duration::hours(3))
//!     .end(now - Duration::hours(1))
//!     .status(BookingStatus::Approved)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `item_request` - Create item request entities
//! - `item` - Create item entities
//! - `booking` - Create booking entities
//! - `comment` - Create comment entities

pub mod booking;
pub mod comment;
pub mod helpers;
pub mod item;
pub mod item_request;
pub mod user;

pub use booking::{create_booking, BookingFactory};
pub use comment::{create_comment, CommentFactory};
pub use helpers::{create_booking_with_dependencies, create_item_with_owner};
pub use item::{create_item, ItemFactory};
pub use item_request::{create_item_request, ItemRequestFactory};
pub use user::{create_user, UserFactory};
