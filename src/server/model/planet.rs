//! Planet domain models and parameters.

use crate::model::planet::{PlanetDto, SavePlanetDto};

/// A planet record.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub diameter: i32,
    pub rotation_period: i32,
    pub orbital_period: i32,
    /// Population, unknown for some worlds.
    pub population: Option<i64>,
    pub climate: String,
    pub terrain: Option<String>,
}

impl Planet {
    /// Converts an entity model to a planet domain model.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Planet` - The converted planet domain model
    pub fn from_entity(entity: entity::planet::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            diameter: entity.diameter,
            rotation_period: entity.rotation_period,
            orbital_period: entity.orbital_period,
            population: entity.population,
            climate: entity.climate,
            terrain: entity.terrain,
        }
    }

    pub fn into_dto(self) -> PlanetDto {
        PlanetDto {
            id: self.id,
            name: self.name,
            description: self.description,
            diameter: self.diameter,
            rotation_period: self.rotation_period,
            orbital_period: self.orbital_period,
            population: self.population,
            climate: self.climate,
            terrain: self.terrain,
        }
    }
}

/// Field values for creating or fully replacing a planet.
#[derive(Debug, Clone)]
pub struct SavePlanetParam {
    pub name: String,
    pub description: String,
    pub diameter: i32,
    pub rotation_period: i32,
    pub orbital_period: i32,
    pub population: Option<i64>,
    pub climate: String,
    pub terrain: Option<String>,
}

impl SavePlanetParam {
    pub fn from_dto(dto: SavePlanetDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            diameter: dto.diameter,
            rotation_period: dto.rotation_period,
            orbital_period: dto.orbital_period,
            population: dto.population,
            climate: dto.climate,
            terrain: dto.terrain,
        }
    }
}
