//! Favorite service for business logic.
//!
//! This module provides the `FavoriteService`, the favorite store of the application.
//! Adding and removing favorites each run inside a single database transaction and
//! return the caller's refreshed favorites list.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::favorite::FavoriteRepository,
    error::{favorite::FavoriteError, AppError},
    model::favorite::{Favorite, FavoriteParam},
};

/// Service providing business logic for a user's favorites.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new FavoriteService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FavoriteService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a user's favorites ordered by ID.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the favorites
    ///
    /// # Returns
    /// - `Ok(Vec<Favorite>)` - The user's favorites
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::InternalErr)` - A stored row does not match its type tag
    pub async fn list(&self, user_id: i32) -> Result<Vec<Favorite>, AppError> {
        FavoriteRepository::new(self.db).list_by_user(user_id).await
    }

    /// Adds a favorite and returns the user's refreshed favorites.
    ///
    /// The target must exist. Every add inserts a new row, so adding the same
    /// target twice lists it twice.
    ///
    /// # Arguments
    /// - `param` - Owner and target of the favorite
    ///
    /// # Returns
    /// - `Ok(Vec<Favorite>)` - The user's favorites after the add
    /// - `Err(AppError::FavoriteErr(TargetNotFound))` - No record exists for the target
    /// - `Err(AppError::DbErr)` - Database error during the transaction
    pub async fn add(&self, param: FavoriteParam) -> Result<Vec<Favorite>, AppError> {
        let txn = self.db.begin().await?;
        let favorite_repo = FavoriteRepository::new(&txn);

        if !favorite_repo.target_exists(param.target).await? {
            return Err(FavoriteError::TargetNotFound {
                kind: param.target.kind(),
                target_id: param.target.id(),
            }
            .into());
        }

        let favorite = favorite_repo.create(param).await?;
        tracing::debug!(
            "User {} added favorite {} ({} {})",
            param.user_id,
            favorite.id,
            param.target.kind(),
            param.target.id()
        );

        let favorites = favorite_repo.list_by_user(param.user_id).await?;
        txn.commit().await?;

        Ok(favorites)
    }

    /// Removes a favorite and returns the user's refreshed favorites.
    ///
    /// When the same target was added more than once, only the oldest entry is removed.
    ///
    /// # Arguments
    /// - `param` - Owner and target identifying the favorite
    ///
    /// # Returns
    /// - `Ok(Vec<Favorite>)` - The user's favorites after the removal
    /// - `Err(AppError::FavoriteErr(NotFound))` - The user has no such favorite
    /// - `Err(AppError::DbErr)` - Database error during the transaction
    pub async fn remove(&self, param: FavoriteParam) -> Result<Vec<Favorite>, AppError> {
        let txn = self.db.begin().await?;
        let favorite_repo = FavoriteRepository::new(&txn);

        let Some(id) = favorite_repo.find_id(param).await? else {
            return Err(FavoriteError::NotFound {
                kind: param.target.kind(),
                target_id: param.target.id(),
            }
            .into());
        };

        favorite_repo.delete(id).await?;
        tracing::debug!("User {} removed favorite {}", param.user_id, id);

        let favorites = favorite_repo.list_by_user(param.user_id).await?;
        txn.commit().await?;

        Ok(favorites)
    }
}
