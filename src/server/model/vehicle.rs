//! Vehicle domain models and parameters.

use crate::model::vehicle::{SaveVehicleDto, VehicleDto};

/// A vehicle record.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Manufacturer's model designation, serialized as `model`.
    pub model_name: String,
    pub vehicle_class: String,
    pub manufacturer: String,
    pub length: i32,
    pub crew: i32,
    pub cargo_capacity: i32,
}

impl Vehicle {
    /// Converts an entity model to a vehicle domain model.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Vehicle` - The converted vehicle domain model
    pub fn from_entity(entity: entity::vehicle::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            model_name: entity.model_name,
            vehicle_class: entity.vehicle_class,
            manufacturer: entity.manufacturer,
            length: entity.length,
            crew: entity.crew,
            cargo_capacity: entity.cargo_capacity,
        }
    }

    pub fn into_dto(self) -> VehicleDto {
        VehicleDto {
            id: self.id,
            name: self.name,
            description: self.description,
            model: self.model_name,
            vehicle_class: self.vehicle_class,
            manufacturer: self.manufacturer,
            length: self.length,
            crew: self.crew,
            cargo_capacity: self.cargo_capacity,
        }
    }
}

/// Field values for creating or fully replacing a vehicle.
#[derive(Debug, Clone)]
pub struct SaveVehicleParam {
    pub name: String,
    pub description: String,
    pub model_name: String,
    pub vehicle_class: String,
    pub manufacturer: String,
    pub length: i32,
    pub crew: i32,
    pub cargo_capacity: i32,
}

impl SaveVehicleParam {
    pub fn from_dto(dto: SaveVehicleDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            model_name: dto.model,
            vehicle_class: dto.vehicle_class,
            manufacturer: dto.manufacturer,
            length: dto.length,
            crew: dto.crew,
            cargo_capacity: dto.cargo_capacity,
        }
    }
}
