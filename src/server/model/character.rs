//! Character domain models and parameters.

use crate::model::character::{CharacterDto, SaveCharacterDto};

/// A character record.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub hair_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: String,
    pub skin_color: Option<String>,
    pub eye_color: String,
}

impl Character {
    /// Converts an entity model to a character domain model.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Character` - The converted character domain model
    pub fn from_entity(entity: entity::character::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            hair_color: entity.hair_color,
            birth_year: entity.birth_year,
            gender: entity.gender,
            skin_color: entity.skin_color,
            eye_color: entity.eye_color,
        }
    }

    pub fn into_dto(self) -> CharacterDto {
        CharacterDto {
            id: self.id,
            name: self.name,
            description: self.description,
            hair_color: self.hair_color,
            birth_year: self.birth_year,
            gender: self.gender,
            skin_color: self.skin_color,
            eye_color: self.eye_color,
        }
    }
}

/// Field values for creating or fully replacing a character.
#[derive(Debug, Clone)]
pub struct SaveCharacterParam {
    pub name: String,
    pub description: String,
    pub hair_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: String,
    pub skin_color: Option<String>,
    pub eye_color: String,
}

impl SaveCharacterParam {
    pub fn from_dto(dto: SaveCharacterDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            hair_color: dto.hair_color,
            birth_year: dto.birth_year,
            gender: dto.gender,
            skin_color: dto.skin_color,
            eye_color: dto.eye_color,
        }
    }
}
