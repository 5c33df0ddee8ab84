//! Item data repository for database operations.
//!
//! Provides the `ItemRepository` for the item catalog: inserts, partial updates written as
//! full rows, owner listings, text search and lookups by answering request.

use crate::server::model::item::Item;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Repository providing database operations for items.
pub struct ItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new item.
    ///
    /// # Arguments
    /// - `owner_id`: ID of the owning user
    /// - `name`: Item name
    /// - `description`: Item description
    /// - `available`: Whether the item can be booked
    /// - `request_id`: Request this item answers, if any
    ///
    /// # Returns
    /// - `Ok(Item)`: The created item
    /// - `Err(DbErr)`: Database error, including foreign key violations
    pub async fn create(
        &self,
        owner_id: i32,
        name: String,
        description: String,
        available: bool,
        request_id: Option<i32>,
    ) -> Result<Item, DbErr> {
        let entity = entity::item::ActiveModel {
            name: ActiveValue::Set(name),
            description: ActiveValue::Set(description),
            available: ActiveValue::Set(available),
            owner_id: ActiveValue::Set(owner_id),
            request_id: ActiveValue::Set(request_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Item::from_entity(entity))
    }

    /// Gets an item by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Item))`: Item found
    /// - `Ok(None)`: Item not found
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Item>, DbErr> {
        let entity = entity::prelude::Item::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Item::from_entity))
    }

    /// Gets every item whose ID is in `ids`; unknown IDs are skipped.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Item>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Item::find()
            .filter(entity::item::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Item::from_entity).collect())
    }

    /// Writes name, description and availability of `item` back to its row.
    ///
    /// Owner and originating request never change after creation.
    ///
    /// # Returns
    /// - `Ok(Item)`: The updated item
    /// - `Err(DbErr::RecordNotUpdated)`: No row with the item's ID
    pub async fn update(&self, item: Item) -> Result<Item, DbErr> {
        let entity = entity::item::ActiveModel {
            id: ActiveValue::Unchanged(item.id),
            name: ActiveValue::Set(item.name),
            description: ActiveValue::Set(item.description),
            available: ActiveValue::Set(item.available),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Item::from_entity(entity))
    }

    /// Gets all items of an owner ordered by ID.
    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<Item>, DbErr> {
        let entities = entity::prelude::Item::find()
            .filter(entity::item::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::item::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Item::from_entity).collect())
    }

    /// Searches available items whose name or description contains `text`.
    ///
    /// Matching uses SQL `LIKE`, which SQLite evaluates case-insensitively for ASCII.
    /// Results are ordered by ID.
    pub async fn search(&self, text: &str) -> Result<Vec<Item>, DbErr> {
        let entities = entity::prelude::Item::find()
            .filter(entity::item::Column::Available.eq(true))
            .filter(
                Condition::any()
                    .add(entity::item::Column::Name.contains(text))
                    .add(entity::item::Column::Description.contains(text)),
            )
            .order_by_asc(entity::item::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Item::from_entity).collect())
    }

    /// Gets items created in answer to any of the given requests, ordered by ID.
    pub async fn get_by_request_ids(&self, request_ids: &[i32]) -> Result<Vec<Item>, DbErr> {
        if request_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Item::find()
            .filter(entity::item::Column::RequestId.is_in(request_ids.iter().copied()))
            .order_by_asc(entity::item::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Item::from_entity).collect())
    }
}
