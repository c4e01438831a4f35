//! Vehicle service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::vehicle::VehicleRepository,
    error::AppError,
    model::vehicle::{SaveVehicleParam, Vehicle},
};

/// Service providing CRUD operations for vehicles.
pub struct VehicleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: SaveVehicleParam) -> Result<Vehicle, AppError> {
        let vehicle = VehicleRepository::new(self.db).create(param).await?;
        Ok(vehicle)
    }

    /// Retrieves a vehicle by ID, failing with `NotFound` when absent.
    pub async fn get_by_id(&self, id: i32) -> Result<Vehicle, AppError> {
        VehicleRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn get_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = VehicleRepository::new(self.db).get_all().await?;
        Ok(vehicles)
    }

    /// Replaces every field of a vehicle, failing with `NotFound` when absent.
    pub async fn update(&self, id: i32, param: SaveVehicleParam) -> Result<Vehicle, AppError> {
        VehicleRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes a vehicle, failing with `NotFound` when absent.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !VehicleRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Vehicle {} not found", id))
}
