//! User service for business logic.
//!
//! This module provides the `UserService` for user queries used by the user
//! listing and current user endpoints.

use sea_orm::DatabaseConnection;

use crate::server::{data::user::UserRepository, error::AppError, model::user::User};

/// Service providing business logic for user queries.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all users ordered by username.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All registered users
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;
        Ok(users)
    }
}
