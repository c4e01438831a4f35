//! Planet service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::planet::PlanetRepository,
    error::AppError,
    model::planet::{Planet, SavePlanetParam},
};

/// Service providing CRUD operations for planets.
pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: SavePlanetParam) -> Result<Planet, AppError> {
        let planet = PlanetRepository::new(self.db).create(param).await?;
        Ok(planet)
    }

    /// Retrieves a planet by ID, failing with `NotFound` when absent.
    pub async fn get_by_id(&self, id: i32) -> Result<Planet, AppError> {
        PlanetRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn get_all(&self) -> Result<Vec<Planet>, AppError> {
        let planets = PlanetRepository::new(self.db).get_all().await?;
        Ok(planets)
    }

    /// Replaces every field of a planet, failing with `NotFound` when absent.
    pub async fn update(&self, id: i32, param: SavePlanetParam) -> Result<Planet, AppError> {
        PlanetRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes a planet, failing with `NotFound` when absent.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !PlanetRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Planet {} not found", id))
}
