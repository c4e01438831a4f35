use crate::server::{data::character::CharacterRepository, model::character::SaveCharacterParam};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod update;

fn save_param(name: &str) -> SaveCharacterParam {
    SaveCharacterParam {
        name: name.to_string(),
        description: "Jedi Knight".to_string(),
        hair_color: Some("blond".to_string()),
        birth_year: None,
        gender: "male".to_string(),
        skin_color: None,
        eye_color: "blue".to_string(),
    }
}
