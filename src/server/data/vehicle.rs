//! Vehicle data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::server::model::vehicle::{SaveVehicleParam, Vehicle};

/// Repository providing CRUD operations for vehicles.
pub struct VehicleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new vehicle.
    ///
    /// # Arguments
    /// - `param` - Field values for the vehicle
    ///
    /// # Returns
    /// - `Ok(Vehicle)` - The created vehicle with its assigned ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: SaveVehicleParam) -> Result<Vehicle, DbErr> {
        let entity = entity::vehicle::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            model_name: ActiveValue::Set(param.model_name),
            vehicle_class: ActiveValue::Set(param.vehicle_class),
            manufacturer: ActiveValue::Set(param.manufacturer),
            length: ActiveValue::Set(param.length),
            crew: ActiveValue::Set(param.crew),
            cargo_capacity: ActiveValue::Set(param.cargo_capacity),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Vehicle::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Vehicle>, DbErr> {
        let entity = entity::prelude::Vehicle::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Vehicle::from_entity))
    }

    /// Gets all vehicles ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Vehicle>, DbErr> {
        let entities = entity::prelude::Vehicle::find()
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Vehicle::from_entity).collect())
    }

    /// Replaces every field of an existing vehicle.
    ///
    /// # Returns
    /// - `Ok(Some(Vehicle))` - The updated vehicle
    /// - `Ok(None)` - No vehicle with that ID
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, id: i32, param: SaveVehicleParam) -> Result<Option<Vehicle>, DbErr> {
        let Some(entity) = entity::prelude::Vehicle::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model = entity.into_active_model();
        active_model.name = ActiveValue::Set(param.name);
        active_model.description = ActiveValue::Set(param.description);
        active_model.model_name = ActiveValue::Set(param.model_name);
        active_model.vehicle_class = ActiveValue::Set(param.vehicle_class);
        active_model.manufacturer = ActiveValue::Set(param.manufacturer);
        active_model.length = ActiveValue::Set(param.length);
        active_model.crew = ActiveValue::Set(param.crew);
        active_model.cargo_capacity = ActiveValue::Set(param.cargo_capacity);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Vehicle::from_entity(entity)))
    }

    /// Deletes a vehicle by ID, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Vehicle::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
