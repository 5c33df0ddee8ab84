//! Item request service.
//!
//! Users post requests for items nobody lists yet; other users answer them by listing an
//! item with the request's ID. Every read returns requests together with those answers.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::server::{
    data::{item::ItemRepository, item_request::ItemRequestRepository, user::UserRepository},
    error::AppError,
    model::{
        item::Item,
        item_request::{CreateItemRequestParam, ItemRequest, ItemRequestWithItems},
        page::Page,
    },
    service::require_text,
};

pub struct ItemRequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemRequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts a new item request stamped with `now`.
    ///
    /// # Returns
    /// - `Ok(ItemRequestWithItems)` - The created request, with no answers yet
    /// - `Err(AppError::BadRequest)` - Description blank
    /// - `Err(AppError::NotFound)` - Requester does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(
        &self,
        param: CreateItemRequestParam,
        now: DateTime<Utc>,
    ) -> Result<ItemRequestWithItems, AppError> {
        let description = require_text(
            param.description,
            "Request description must not be blank",
        )?;
        self.ensure_user(param.requester_id).await?;

        let request = ItemRequestRepository::new(self.db)
            .create(param.requester_id, description, now)
            .await?;

        tracing::info!(
            "User {} posted item request {}",
            request.requester_id,
            request.id
        );

        Ok(ItemRequestWithItems {
            request,
            items: Vec::new(),
        })
    }

    /// Gets the requester's own requests, newest first.
    pub async fn get_own(&self, requester_id: i32) -> Result<Vec<ItemRequestWithItems>, AppError> {
        self.ensure_user(requester_id).await?;

        let requests = ItemRequestRepository::new(self.db)
            .get_by_requester(requester_id)
            .await?;

        self.with_items(requests).await
    }

    /// Gets one page of other users' requests, newest first.
    pub async fn get_all(
        &self,
        requester_id: i32,
        page: Page,
    ) -> Result<Vec<ItemRequestWithItems>, AppError> {
        self.ensure_user(requester_id).await?;

        let requests = ItemRequestRepository::new(self.db)
            .get_all_except(requester_id, page)
            .await?;

        self.with_items(requests).await
    }

    /// Gets a single request with its answers.
    ///
    /// # Returns
    /// - `Ok(ItemRequestWithItems)` - The request
    /// - `Err(AppError::NotFound)` - Caller or request does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get(
        &self,
        request_id: i32,
        requester_id: i32,
    ) -> Result<ItemRequestWithItems, AppError> {
        self.ensure_user(requester_id).await?;

        let request = ItemRequestRepository::new(self.db)
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Item request not found".to_string()))?;

        let mut with_items = self.with_items(vec![request]).await?;

        with_items
            .pop()
            .ok_or_else(|| AppError::InternalError("Item request lost while loading".to_string()))
    }

    async fn ensure_user(&self, user_id: i32) -> Result<(), AppError> {
        if UserRepository::new(self.db).exists(user_id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound("User not found".to_string()))
        }
    }

    async fn with_items(
        &self,
        requests: Vec<ItemRequest>,
    ) -> Result<Vec<ItemRequestWithItems>, AppError> {
        let request_ids: Vec<i32> = requests.iter().map(|request| request.id).collect();

        let mut answers: HashMap<i32, Vec<Item>> = HashMap::new();
        for item in ItemRepository::new(self.db)
            .get_by_request_ids(&request_ids)
            .await?
        {
            if let Some(request_id) = item.request_id {
                answers.entry(request_id).or_default().push(item);
            }
        }

        Ok(requests
            .into_iter()
            .map(|request| ItemRequestWithItems {
                items: answers.remove(&request.id).unwrap_or_default(),
                request,
            })
            .collect())
    }
}
