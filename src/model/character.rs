use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub hair_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: String,
    pub skin_color: Option<String>,
    pub eye_color: String,
}

/// Request body for creating or replacing a character.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SaveCharacterDto {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub hair_color: Option<String>,
    #[serde(default)]
    pub birth_year: Option<String>,
    pub gender: String,
    #[serde(default)]
    pub skin_color: Option<String>,
    pub eye_color: String,
}
