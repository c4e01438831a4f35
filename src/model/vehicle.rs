use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VehicleDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub model: String,
    pub vehicle_class: String,
    pub manufacturer: String,
    pub length: i32,
    pub crew: i32,
    pub cargo_capacity: i32,
}

/// Request body for creating or replacing a vehicle.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SaveVehicleDto {
    pub name: String,
    pub description: String,
    pub model: String,
    pub vehicle_class: String,
    pub manufacturer: String,
    pub length: i32,
    pub crew: i32,
    pub cargo_capacity: i32,
}
