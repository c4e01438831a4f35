//! Character factory for creating test character entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test characters with customizable fields.
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
    hair_color: Option<String>,
    birth_year: Option<String>,
    gender: String,
    skin_color: Option<String>,
    eye_color: String,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a new CharacterFactory with default values.
    ///
    /// Defaults to a `"Character {id}"` with blond hair, fair skin and blue eyes.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Character {}", id),
            description: format!("Description of character {}", id),
            hair_color: Some("blond".to_string()),
            birth_year: Some("19BBY".to_string()),
            gender: "male".to_string(),
            skin_color: Some("fair".to_string()),
            eye_color: "blue".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn hair_color(mut self, hair_color: Option<String>) -> Self {
        self.hair_color = hair_color;
        self
    }

    pub fn eye_color(mut self, eye_color: impl Into<String>) -> Self {
        self.eye_color = eye_color.into();
        self
    }

    /// Builds and inserts the character entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::character::Model)` - Created character entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            hair_color: ActiveValue::Set(self.hair_color),
            birth_year: ActiveValue::Set(self.birth_year),
            gender: ActiveValue::Set(self.gender),
            skin_color: ActiveValue::Set(self.skin_color),
            eye_color: ActiveValue::Set(self.eye_color),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default values.
pub async fn create_character(db: &DatabaseConnection) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db).build().await
}
