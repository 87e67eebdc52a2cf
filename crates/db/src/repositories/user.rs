//! User repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::entities::users;

/// Error types for user operations.
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    /// User not found.
    #[error("user not found")]
    NotFound,

    /// Email already registered.
    #[error("email already registered")]
    EmailTaken,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserInput {
    /// Email address, unique across users.
    pub email: String,
    /// Argon2id password hash (PHC string).
    pub password_hash: String,
    /// Optional display name.
    pub display_name: Option<String>,
}

/// User repository.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user.
    ///
    /// # Errors
    ///
    /// Returns `UserError::EmailTaken` if the email is already registered.
    pub async fn create(&self, input: CreateUserInput) -> Result<users::Model, UserError> {
        if self.find_by_email(&input.email).await?.is_some() {
            return Err(UserError::EmailTaken);
        }

        let model = users::ActiveModel {
            id: Set(Uuid::now_v7()),
            email: Set(input.email),
            password_hash: Set(input.password_hash),
            display_name: Set(input.display_name),
            ..Default::default()
        };
        Ok(model.insert(&self.db).await?)
    }

    /// Finds a user by email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<users::Model>, UserError> {
        Ok(users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await?)
    }

    /// Finds a user by id.
    ///
    /// # Errors
    ///
    /// Returns `UserError::NotFound` if no such user exists.
    pub async fn get(&self, id: Uuid) -> Result<users::Model, UserError> {
        users::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(UserError::NotFound)
    }
}
