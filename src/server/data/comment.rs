use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::comment::Comment;

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a comment.
    ///
    /// # Returns
    /// - `Ok(entity::comment::Model)`: The stored comment; the caller resolves the author name
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        item_id: i32,
        author_id: i32,
        text: String,
        created: DateTime<Utc>,
    ) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            text: ActiveValue::Set(text),
            item_id: ActiveValue::Set(item_id),
            author_id: ActiveValue::Set(author_id),
            created: ActiveValue::Set(created),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets the comments of an item, oldest first, with author names resolved.
    pub async fn get_by_item(&self, item_id: i32) -> Result<Vec<Comment>, DbErr> {
        let mut by_item = self.get_by_items(&[item_id]).await?;

        Ok(by_item.remove(&item_id).unwrap_or_default())
    }

    /// Gets the comments of several items in one query, grouped by item ID.
    ///
    /// Items without comments have no entry in the returned map.
    pub async fn get_by_items(&self, item_ids: &[i32]) -> Result<HashMap<i32, Vec<Comment>>, DbErr> {
        if item_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ItemId.is_in(item_ids.iter().copied()))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::comment::Column::Created)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<Comment>> = HashMap::new();
        for (comment, author) in rows {
            let author_name = author.map(|a| a.name).unwrap_or_default();
            grouped
                .entry(comment.item_id)
                .or_default()
                .push(Comment::from_entity(comment, author_name));
        }

        Ok(grouped)
    }
}
