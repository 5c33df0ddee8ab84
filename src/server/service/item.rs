//! Item catalog service.
//!
//! Handles item creation and owner-only updates, builds item cards with comments and the
//! owner's last/next approved bookings, runs text search and admits comments from users
//! who finished an approved booking of the item.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        booking::BookingRepository, comment::CommentRepository, item::ItemRepository,
        item_request::ItemRequestRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        comment::{Comment, CreateCommentParam},
        item::{CreateItemParam, Item, ItemDetails, UpdateItemParam},
    },
    service::{booking::BookingService, item_lock::ItemLocks, require_text},
};

pub struct ItemService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a ItemLocks,
}

impl<'a> ItemService<'a> {
    /// Creates a new ItemService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `locks` - Per-item lock table, taken while availability changes
    pub fn new(db: &'a DatabaseConnection, locks: &'a ItemLocks) -> Self {
        Self { db, locks }
    }

    /// Lists a new item.
    ///
    /// # Returns
    /// - `Ok(Item)` - The created item
    /// - `Err(AppError::BadRequest)` - Name or description blank, availability missing
    /// - `Err(AppError::NotFound)` - Owner or referenced request does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateItemParam) -> Result<Item, AppError> {
        let name = require_text(param.name, "Item name must not be blank")?;
        let description = require_text(param.description, "Item description must not be blank")?;
        let available = param
            .available
            .ok_or_else(|| AppError::BadRequest("Item availability is required".to_string()))?;

        if !UserRepository::new(self.db).exists(param.owner_id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        if let Some(request_id) = param.request_id {
            if ItemRequestRepository::new(self.db)
                .find_by_id(request_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound("Item request not found".to_string()));
            }
        }

        let item = ItemRepository::new(self.db)
            .create(param.owner_id, name, description, available, param.request_id)
            .await?;

        tracing::info!("User {} listed item {}", item.owner_id, item.id);

        Ok(item)
    }

    /// Applies a partial update to an item on behalf of its owner.
    ///
    /// Blank names and descriptions leave the stored value unchanged. A caller who does
    /// not own the item gets the same answer as for a missing item.
    ///
    /// # Returns
    /// - `Ok(Item)` - The updated item
    /// - `Err(AppError::NotFound)` - Item missing or not owned by the actor
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, param: UpdateItemParam) -> Result<Item, AppError> {
        let _guard = self.locks.acquire(param.item_id).await;

        let repo = ItemRepository::new(self.db);
        let mut item = repo
            .find_by_id(param.item_id)
            .await?
            .filter(|item| item.owner_id == param.actor_id)
            .ok_or_else(|| {
                tracing::warn!(
                    "User {} cannot update item {}: missing or not owned",
                    param.actor_id,
                    param.item_id
                );
                AppError::NotFound("Item not found".to_string())
            })?;

        if let Some(name) = param.name.filter(|name| !name.trim().is_empty()) {
            item.name = name;
        }
        if let Some(description) = param
            .description
            .filter(|description| !description.trim().is_empty())
        {
            item.description = description;
        }
        if let Some(available) = param.available {
            item.available = available;
        }

        let item = repo.update(item).await?;
        tracing::info!("Owner {} updated item {}", param.actor_id, item.id);

        Ok(item)
    }

    /// Gets an item card.
    ///
    /// Comments are always included. Last and next approved bookings are only filled in
    /// when `actor_id` owns the item.
    ///
    /// # Returns
    /// - `Ok(ItemDetails)` - The item card
    /// - `Err(AppError::NotFound)` - Item does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get(
        &self,
        item_id: i32,
        actor_id: i32,
        now: DateTime<Utc>,
    ) -> Result<ItemDetails, AppError> {
        let item = ItemRepository::new(self.db)
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;

        let comments = CommentRepository::new(self.db).get_by_item(item.id).await?;

        let mut details = ItemDetails {
            item,
            last_booking: None,
            next_booking: None,
            comments,
        };

        if details.item.owner_id == actor_id {
            self.fill_bookings(&mut details, now).await?;
        }

        Ok(details)
    }

    /// Gets every item of an owner as owner-view cards, ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<ItemDetails>)` - Item cards with comments and surrounding bookings
    /// - `Err(AppError::NotFound)` - Owner does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_by_owner(
        &self,
        owner_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Vec<ItemDetails>, AppError> {
        if !UserRepository::new(self.db).exists(owner_id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let items = ItemRepository::new(self.db).get_by_owner(owner_id).await?;
        let item_ids: Vec<i32> = items.iter().map(|item| item.id).collect();
        let mut comments = CommentRepository::new(self.db)
            .get_by_items(&item_ids)
            .await?;

        let mut cards = Vec::with_capacity(items.len());
        for item in items {
            let mut details = ItemDetails {
                comments: comments.remove(&item.id).unwrap_or_default(),
                item,
                last_booking: None,
                next_booking: None,
            };
            self.fill_bookings(&mut details, now).await?;
            cards.push(details);
        }

        Ok(cards)
    }

    /// Searches available items by name or description. Blank text matches nothing.
    pub async fn search(&self, text: &str) -> Result<Vec<Item>, AppError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(ItemRepository::new(self.db).search(text).await?)
    }

    /// Adds a comment to an item.
    ///
    /// Preconditions, first failure wins:
    /// 1. text is not blank
    /// 2. item exists
    /// 3. author finished an APPROVED booking of the item before `now`
    /// 4. author exists
    ///
    /// # Returns
    /// - `Ok(Comment)` - The stored comment with the author's name
    /// - `Err(AppError::BadRequest)` - Blank text or no finished approved booking
    /// - `Err(AppError::NotFound)` - Item or author does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add_comment(
        &self,
        param: CreateCommentParam,
        now: DateTime<Utc>,
    ) -> Result<Comment, AppError> {
        let text = require_text(param.text, "Comment text must not be blank")?;

        if ItemRepository::new(self.db)
            .find_by_id(param.item_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Item not found".to_string()));
        }

        let eligible = BookingService::new(self.db, self.locks)
            .can_comment(param.author_id, param.item_id, now)
            .await?;
        if !eligible {
            tracing::warn!(
                "User {} cannot comment on item {}: no finished approved booking",
                param.author_id,
                param.item_id
            );
            return Err(AppError::BadRequest(
                "Only users who finished an approved booking of this item can comment".to_string(),
            ));
        }

        let author = UserRepository::new(self.db)
            .find_by_id(param.author_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let entity = CommentRepository::new(self.db)
            .create(param.item_id, author.id, text, now)
            .await?;

        tracing::info!(
            "User {} commented on item {} as comment {}",
            author.id,
            param.item_id,
            entity.id
        );

        Ok(Comment::from_entity(entity, author.name))
    }

    async fn fill_bookings(
        &self,
        details: &mut ItemDetails,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let repo = BookingRepository::new(self.db);

        details.last_booking = repo.find_last_approved(details.item.id, now).await?;
        details.next_booking = repo.find_next_approved(details.item.id, now).await?;

        Ok(())
    }
}
