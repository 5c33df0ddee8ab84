//! Item request factory for creating test item request entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test item requests with customizable fields.
pub struct ItemRequestFactory<'a> {
    db: &'a DatabaseConnection,
    requester_id: i32,
    description: String,
    created: DateTime<Utc>,
}

impl<'a> ItemRequestFactory<'a> {
    /// Creates a new ItemRequestFactory with default values.
    ///
    /// Defaults:
    /// - description: `"Looking for item {id}"`
    /// - created: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `requester_id` - ID of the user asking for the item
    pub fn new(db: &'a DatabaseConnection, requester_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            requester_id,
            description: format!("Looking for item {}", id),
            created: Utc::now(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    /// Builds and inserts the item request entity into the database.
    pub async fn build(self) -> Result<entity::item_request::Model, DbErr> {
        entity::item_request::ActiveModel {
            description: ActiveValue::Set(self.description),
            requester_id: ActiveValue::Set(self.requester_id),
            created: ActiveValue::Set(self.created),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an item request with default values for the given requester.
pub async fn create_item_request(
    db: &DatabaseConnection,
    requester_id: i32,
) -> Result<entity::item_request::Model, DbErr> {
    ItemRequestFactory::new(db, requester_id).build().await
}
