//! Favorite data repository for database operations.
//!
//! This module provides the `FavoriteRepository`, the only place that knows favorites
//! are stored as a type tag plus three nullable target columns. Rows are converted to
//! the `Favorite` sum type on the way out and built from a `FavoriteTarget` on the way in.
//!
//! The repository is generic over `ConnectionTrait` so the favorite service can run a
//! lookup and a write inside one transaction.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::favorite::{Favorite, FavoriteParam, FavoriteTarget},
};

/// Repository providing database operations for favorites.
pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new FavoriteRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `FavoriteRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all favorites owned by a user ordered by ID.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the favorites
    ///
    /// # Returns
    /// - `Ok(Vec<Favorite>)` - The user's favorites, empty if none
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::InternalErr)` - A stored row does not match its type tag
    pub async fn list_by_user(&self, user_id: i32) -> Result<Vec<Favorite>, AppError> {
        let entities = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(Favorite::from_entity).collect()
    }

    /// Finds the ID of the favorite matching owner, kind and target ID.
    ///
    /// Duplicates are allowed; the lowest matching ID is returned.
    ///
    /// # Arguments
    /// - `param` - Owner and target to match
    ///
    /// # Returns
    /// - `Ok(Some(id))` - Matching favorite found
    /// - `Ok(None)` - The user has not favorited this target
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_id(&self, param: FavoriteParam) -> Result<Option<i32>, DbErr> {
        let target_column = match param.target {
            FavoriteTarget::Character(_) => entity::favorite::Column::CharId,
            FavoriteTarget::Planet(_) => entity::favorite::Column::PlanetId,
            FavoriteTarget::Vehicle(_) => entity::favorite::Column::VehicleId,
        };

        let entity = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(param.user_id))
            .filter(entity::favorite::Column::Kind.eq(param.target.kind().tag()))
            .filter(target_column.eq(param.target.id()))
            .order_by_asc(entity::favorite::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(|favorite| favorite.id))
    }

    /// Inserts a favorite with only the column matching its target populated.
    ///
    /// # Arguments
    /// - `param` - Owner and target of the new favorite
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite
    /// - `Err(AppError::DbErr)` - Database error, including a foreign key violation
    ///   for a missing user or target
    pub async fn create(&self, param: FavoriteParam) -> Result<Favorite, AppError> {
        let (char_id, planet_id, vehicle_id) = param.target.columns();

        let entity = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            kind: ActiveValue::Set(param.target.kind().tag().to_string()),
            char_id: ActiveValue::Set(char_id),
            planet_id: ActiveValue::Set(planet_id),
            vehicle_id: ActiveValue::Set(vehicle_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Favorite::from_entity(entity)
    }

    /// Deletes a favorite by ID.
    ///
    /// # Returns
    /// - `Ok(())` - Favorite deleted, or no row with that ID existed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Favorite::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks whether the record a target points at exists.
    ///
    /// # Returns
    /// - `Ok(true)` - The character, planet or vehicle exists
    /// - `Ok(false)` - No record with that ID in the target's table
    /// - `Err(DbErr)` - Database error during count query
    pub async fn target_exists(&self, target: FavoriteTarget) -> Result<bool, DbErr> {
        let count = match target {
            FavoriteTarget::Character(id) => {
                entity::prelude::Character::find_by_id(id)
                    .count(self.db)
                    .await?
            }
            FavoriteTarget::Planet(id) => {
                entity::prelude::Planet::find_by_id(id)
                    .count(self.db)
                    .await?
            }
            FavoriteTarget::Vehicle(id) => {
                entity::prelude::Vehicle::find_by_id(id)
                    .count(self.db)
                    .await?
            }
        };

        Ok(count > 0)
    }
}
