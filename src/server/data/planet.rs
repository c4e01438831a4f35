//! Planet data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::server::model::planet::{Planet, SavePlanetParam};

/// Repository providing CRUD operations for planets.
pub struct PlanetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new planet.
    ///
    /// # Arguments
    /// - `param` - Field values for the planet
    ///
    /// # Returns
    /// - `Ok(Planet)` - The created planet with its assigned ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: SavePlanetParam) -> Result<Planet, DbErr> {
        let entity = entity::planet::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            diameter: ActiveValue::Set(param.diameter),
            rotation_period: ActiveValue::Set(param.rotation_period),
            orbital_period: ActiveValue::Set(param.orbital_period),
            population: ActiveValue::Set(param.population),
            climate: ActiveValue::Set(param.climate),
            terrain: ActiveValue::Set(param.terrain),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Planet::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Planet>, DbErr> {
        let entity = entity::prelude::Planet::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Planet::from_entity))
    }

    /// Gets all planets ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Planet>, DbErr> {
        let entities = entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Planet::from_entity).collect())
    }

    /// Replaces every field of an existing planet.
    ///
    /// # Returns
    /// - `Ok(Some(Planet))` - The updated planet
    /// - `Ok(None)` - No planet with that ID
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, id: i32, param: SavePlanetParam) -> Result<Option<Planet>, DbErr> {
        let Some(entity) = entity::prelude::Planet::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model = entity.into_active_model();
        active_model.name = ActiveValue::Set(param.name);
        active_model.description = ActiveValue::Set(param.description);
        active_model.diameter = ActiveValue::Set(param.diameter);
        active_model.rotation_period = ActiveValue::Set(param.rotation_period);
        active_model.orbital_period = ActiveValue::Set(param.orbital_period);
        active_model.population = ActiveValue::Set(param.population);
        active_model.climate = ActiveValue::Set(param.climate);
        active_model.terrain = ActiveValue::Set(param.terrain);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Planet::from_entity(entity)))
    }

    /// Deletes a planet by ID, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Planet::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
