use crate::server::{data::planet::PlanetRepository, model::planet::SavePlanetParam};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;

fn save_param(name: &str, population: Option<i64>) -> SavePlanetParam {
    SavePlanetParam {
        name: name.to_string(),
        description: "Ecumenopolis".to_string(),
        diameter: 12240,
        rotation_period: 24,
        orbital_period: 368,
        population,
        climate: "temperate".to_string(),
        terrain: Some("cityscape".to_string()),
    }
}
