//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation, updates, deletion and lookups with conversion between entity
//! models and domain models at the infrastructure boundary.

use crate::server::model::user::User;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `name` - Display name
    /// - `email` - Email address, unique across users
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with its assigned ID
    /// - `Err(DbErr)` - Database error, including a unique constraint violation on email
    pub async fn create(&self, name: String, email: String) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(name),
            email: ActiveValue::Set(email),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds every user whose ID is in `ids`, in no particular order.
    ///
    /// Unknown IDs are skipped.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<User>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Checks whether a user with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether an email is already registered to a user other than `except_id`.
    ///
    /// # Arguments
    /// - `email` - Email to look for, compared exactly
    /// - `except_id` - User to ignore, used when a user re-submits their own email
    ///
    /// # Returns
    /// - `Ok(true)` - Another user holds this email
    /// - `Ok(false)` - Email is free
    /// - `Err(DbErr)` - Database error during count query
    pub async fn email_taken(&self, email: &str, except_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Email.eq(email));

        if let Some(id) = except_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Writes every field of `user` back to its row.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotUpdated)` - No row with the user's ID
    pub async fn update(&self, user: User) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            id: ActiveValue::Unchanged(user.id),
            name: ActiveValue::Set(user.name),
            email: ActiveValue::Set(user.email),
        }
        .update(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Deletes a user; related items, bookings, requests and comments cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets all users ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }
}
