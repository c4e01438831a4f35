//! Planet factory for creating test planet entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test planets with customizable fields.
pub struct PlanetFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
    diameter: i32,
    rotation_period: i32,
    orbital_period: i32,
    population: Option<i64>,
    climate: String,
    terrain: Option<String>,
}

impl<'a> PlanetFactory<'a> {
    /// Creates a new PlanetFactory with default values.
    ///
    /// Defaults to an arid desert planet named `"Planet {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Planet {}", id),
            description: format!("Description of planet {}", id),
            diameter: 10465,
            rotation_period: 23,
            orbital_period: 304,
            population: Some(200_000),
            climate: "arid".to_string(),
            terrain: Some("desert".to_string()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn population(mut self, population: Option<i64>) -> Self {
        self.population = population;
        self
    }

    /// Builds and inserts the planet entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::planet::Model)` - Created planet entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::planet::Model, DbErr> {
        entity::planet::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            diameter: ActiveValue::Set(self.diameter),
            rotation_period: ActiveValue::Set(self.rotation_period),
            orbital_period: ActiveValue::Set(self.orbital_period),
            population: ActiveValue::Set(self.population),
            climate: ActiveValue::Set(self.climate),
            terrain: ActiveValue::Set(self.terrain),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a planet with default values.
pub async fn create_planet(db: &DatabaseConnection) -> Result<entity::planet::Model, DbErr> {
    PlanetFactory::new(db).build().await
}
