use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{data::paginate, model::item_request::ItemRequest, model::page::Page};

pub struct ItemRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new item request.
    ///
    /// # Returns
    /// - `Ok(ItemRequest)`: The created request
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        requester_id: i32,
        description: String,
        created: DateTime<Utc>,
    ) -> Result<ItemRequest, DbErr> {
        let entity = entity::item_request::ActiveModel {
            description: ActiveValue::Set(description),
            requester_id: ActiveValue::Set(requester_id),
            created: ActiveValue::Set(created),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ItemRequest::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ItemRequest>, DbErr> {
        let entity = entity::prelude::ItemRequest::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(ItemRequest::from_entity))
    }

    /// Gets the requests made by a user, newest first.
    pub async fn get_by_requester(&self, requester_id: i32) -> Result<Vec<ItemRequest>, DbErr> {
        let entities = entity::prelude::ItemRequest::find()
            .filter(entity::item_request::Column::RequesterId.eq(requester_id))
            .order_by_desc(entity::item_request::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ItemRequest::from_entity).collect())
    }

    /// Gets one page of requests made by everyone except `requester_id`, newest first.
    pub async fn get_all_except(
        &self,
        requester_id: i32,
        page: Page,
    ) -> Result<Vec<ItemRequest>, DbErr> {
        let query = entity::prelude::ItemRequest::find()
            .filter(entity::item_request::Column::RequesterId.ne(requester_id))
            .order_by_desc(entity::item_request::Column::Id);

        let entities = paginate(query, page).all(self.db).await?;

        Ok(entities.into_iter().map(ItemRequest::from_entity).collect())
    }
}
