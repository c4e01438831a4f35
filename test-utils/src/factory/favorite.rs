//! Favorite factory for inserting favorite rows directly.
//!
//! These bypass the application's favorite store so tests can arrange state
//! (including malformed rows) without going through the service layer.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a favorite row with explicit column values.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owner of the favorite
/// - `kind` - Raw type tag stored in the `type` column
/// - `char_id`, `planet_id`, `vehicle_id` - Target columns
///
/// # Returns
/// - `Ok(entity::favorite::Model)` - Created favorite row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_favorite_row(
    db: &DatabaseConnection,
    user_id: i32,
    kind: &str,
    char_id: Option<i32>,
    planet_id: Option<i32>,
    vehicle_id: Option<i32>,
) -> Result<entity::favorite::Model, DbErr> {
    entity::favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        kind: ActiveValue::Set(kind.to_string()),
        char_id: ActiveValue::Set(char_id),
        planet_id: ActiveValue::Set(planet_id),
        vehicle_id: ActiveValue::Set(vehicle_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a character favorite for the given user.
pub async fn create_character_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    char_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    create_favorite_row(db, user_id, "characters", Some(char_id), None, None).await
}

/// Creates a planet favorite for the given user.
pub async fn create_planet_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    planet_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    create_favorite_row(db, user_id, "planets", None, Some(planet_id), None).await
}

/// Creates a vehicle favorite for the given user.
pub async fn create_vehicle_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    vehicle_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    create_favorite_row(db, user_id, "vehicles", None, None, Some(vehicle_id)).await
}
