//! Character data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::server::model::character::{Character, SaveCharacterParam};

/// Repository providing CRUD operations for characters.
pub struct CharacterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterRepository<'a> {
    /// Creates a new CharacterRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CharacterRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new character.
    ///
    /// # Arguments
    /// - `param` - Field values for the character
    ///
    /// # Returns
    /// - `Ok(Character)` - The created character with its assigned ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: SaveCharacterParam) -> Result<Character, DbErr> {
        let entity = entity::character::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            hair_color: ActiveValue::Set(param.hair_color),
            birth_year: ActiveValue::Set(param.birth_year),
            gender: ActiveValue::Set(param.gender),
            skin_color: ActiveValue::Set(param.skin_color),
            eye_color: ActiveValue::Set(param.eye_color),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Character::from_entity(entity))
    }

    /// Finds a character by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Character))` - Character found
    /// - `Ok(None)` - No character with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Character>, DbErr> {
        let entity = entity::prelude::Character::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Character::from_entity))
    }

    /// Gets all characters ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Character>, DbErr> {
        let entities = entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Character::from_entity).collect())
    }

    /// Replaces every field of an existing character.
    ///
    /// # Arguments
    /// - `id` - ID of the character to update
    /// - `param` - New field values
    ///
    /// # Returns
    /// - `Ok(Some(Character))` - The updated character
    /// - `Ok(None)` - No character with that ID
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        id: i32,
        param: SaveCharacterParam,
    ) -> Result<Option<Character>, DbErr> {
        let Some(entity) = entity::prelude::Character::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model = entity.into_active_model();
        active_model.name = ActiveValue::Set(param.name);
        active_model.description = ActiveValue::Set(param.description);
        active_model.hair_color = ActiveValue::Set(param.hair_color);
        active_model.birth_year = ActiveValue::Set(param.birth_year);
        active_model.gender = ActiveValue::Set(param.gender);
        active_model.skin_color = ActiveValue::Set(param.skin_color);
        active_model.eye_color = ActiveValue::Set(param.eye_color);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Character::from_entity(entity)))
    }

    /// Deletes a character by ID.
    ///
    /// Favorites pointing at the character are removed by the foreign key cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Character deleted
    /// - `Ok(false)` - No character with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Character::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
