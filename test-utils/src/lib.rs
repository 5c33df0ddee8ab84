//! ShareIt Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the ShareIt
//! server. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas, plus factories for seeding data.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builder-style factories inserting users, items, requests, bookings and comments
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use test_utils::factory::helpers::create_booking_with_dependencies;
//!
//! #[tokio::test]
//! async fn approves_booking() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_booking_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (owner, booker, item, booking) = create_booking_with_dependencies(db).await?;
//!     // Exercise the booking engine...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
