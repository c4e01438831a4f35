//! Vehicle factory for creating test vehicle entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test vehicles with customizable fields.
pub struct VehicleFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
    model_name: String,
    vehicle_class: String,
    manufacturer: String,
    length: i32,
    crew: i32,
    cargo_capacity: i32,
}

impl<'a> VehicleFactory<'a> {
    /// Creates a new VehicleFactory with default values.
    ///
    /// Defaults to a wheeled crawler named `"Vehicle {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Vehicle {}", id),
            description: format!("Description of vehicle {}", id),
            model_name: format!("Model {}", id),
            vehicle_class: "wheeled".to_string(),
            manufacturer: "Corellia Mining Corporation".to_string(),
            length: 36,
            crew: 46,
            cargo_capacity: 50000,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn crew(mut self, crew: i32) -> Self {
        self.crew = crew;
        self
    }

    /// Builds and inserts the vehicle entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::vehicle::Model)` - Created vehicle entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::vehicle::Model, DbErr> {
        entity::vehicle::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            model_name: ActiveValue::Set(self.model_name),
            vehicle_class: ActiveValue::Set(self.vehicle_class),
            manufacturer: ActiveValue::Set(self.manufacturer),
            length: ActiveValue::Set(self.length),
            crew: ActiveValue::Set(self.crew),
            cargo_capacity: ActiveValue::Set(self.cargo_capacity),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a vehicle with default values.
pub async fn create_vehicle(db: &DatabaseConnection) -> Result<entity::vehicle::Model, DbErr> {
    VehicleFactory::new(db).build().await
}
