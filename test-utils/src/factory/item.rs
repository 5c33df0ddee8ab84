//! Item factory for creating test item entities.
//!
//! Items default to available so that freshly created items can be booked
//! straight away; use `available(false)` for the unavailable case.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test items with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::item::ItemFactory;
///
/// let drill = ItemFactory::new(&db, owner.id)
///     .name("Drill")
///     .available(false)
///     .build()
///     .await?;
/// ```
pub struct ItemFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    name: String,
    description: String,
    available: bool,
    request_id: Option<i32>,
}

impl<'a> ItemFactory<'a> {
    /// Creates a new ItemFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Item {id}"` where id is auto-incremented
    /// - description: `"Description of item {id}"`
    /// - available: `true`
    /// - request_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner_id` - ID of the user owning the item
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            name: format!("Item {}", id),
            description: format!("Description of item {}", id),
            available: true,
            request_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    pub fn request_id(mut self, request_id: Option<i32>) -> Self {
        self.request_id = request_id;
        self
    }

    /// Builds and inserts the item entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::item::Model)` - Created item entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown owner)
    pub async fn build(self) -> Result<entity::item::Model, DbErr> {
        entity::item::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            available: ActiveValue::Set(self.available),
            owner_id: ActiveValue::Set(self.owner_id),
            request_id: ActiveValue::Set(self.request_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available item with default values for the given owner.
pub async fn create_item(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::item::Model, DbErr> {
    ItemFactory::new(db, owner_id).build().await
}
