//! User service for the identity store.
//!
//! Validates names and emails, keeps emails unique and wraps the user repository for the
//! controller layer. Deleting a user cascades to everything the user owns or made.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::is_valid_email,
    server::{
        data::user::UserRepository,
        error::AppError,
        model::user::{CreateUserParam, UpdateUserParam, User},
        service::require_text,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Name blank, email blank or malformed
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let name = require_text(param.name, "User name must not be blank")?;
        let email = require_text(param.email, "User email must not be blank")?;
        check_email(&email)?;

        let repo = UserRepository::new(self.db);
        if repo.email_taken(&email, None).await? {
            tracing::warn!("Rejected registration: email {} already in use", email);
            return Err(AppError::Conflict(format!(
                "Email {} is already registered",
                email
            )));
        }

        let user = repo.create(name, email).await?;
        tracing::info!("Registered user {}", user.id);

        Ok(user)
    }

    /// Gets a user by ID.
    pub async fn get(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Gets every user ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Applies a partial update to a user.
    ///
    /// A blank name leaves the stored name unchanged. A present email must be well formed
    /// and not held by another user; re-submitting the user's own email is allowed.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - User does not exist
    /// - `Err(AppError::BadRequest)` - Email blank or malformed
    /// - `Err(AppError::Conflict)` - Email held by another user
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, param: UpdateUserParam) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);
        let mut user = self.get(param.id).await?;

        if let Some(name) = param.name.filter(|name| !name.trim().is_empty()) {
            user.name = name;
        }

        if let Some(email) = param.email {
            check_email(&email)?;

            if repo.email_taken(&email, Some(user.id)).await? {
                tracing::warn!(
                    "Rejected update of user {}: email {} already in use",
                    user.id,
                    email
                );
                return Err(AppError::Conflict(format!(
                    "Email {} is already registered",
                    email
                )));
            }

            user.email = email;
        }

        let user = repo.update(user).await?;
        tracing::info!("Updated user {}", user.id);

        Ok(user)
    }

    /// Deletes a user together with their items, bookings, requests and comments.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!("Deleted user {}", id);

        Ok(())
    }
}

fn check_email(email: &str) -> Result<(), AppError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!("Invalid email: {}", email)))
    }
}
