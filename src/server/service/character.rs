//! Character service for business logic.
//!
//! Wraps the `CharacterRepository` and turns missing records into `NotFound` errors.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::character::CharacterRepository,
    error::AppError,
    model::character::{Character, SaveCharacterParam},
};

/// Service providing CRUD operations for characters.
pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    /// Creates a new CharacterService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CharacterService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: SaveCharacterParam) -> Result<Character, AppError> {
        let character = CharacterRepository::new(self.db).create(param).await?;
        Ok(character)
    }

    /// Retrieves a character by ID.
    ///
    /// # Returns
    /// - `Ok(Character)` - The character
    /// - `Err(AppError::NotFound)` - No character with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Character, AppError> {
        CharacterRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn get_all(&self) -> Result<Vec<Character>, AppError> {
        let characters = CharacterRepository::new(self.db).get_all().await?;
        Ok(characters)
    }

    /// Replaces every field of a character.
    ///
    /// # Returns
    /// - `Ok(Character)` - The updated character
    /// - `Err(AppError::NotFound)` - No character with that ID
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: SaveCharacterParam) -> Result<Character, AppError> {
        CharacterRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes a character along with any favorites pointing at it.
    ///
    /// # Returns
    /// - `Ok(())` - Character deleted
    /// - `Err(AppError::NotFound)` - No character with that ID
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CharacterRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Character {} not found", id))
}
