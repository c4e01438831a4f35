//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates one of each favorite target kind.
///
/// Useful for tests exercising all three favorite kinds against the same user.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((character, planet, vehicle))` - Tuple of created target entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_targets(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::character::Model,
        entity::planet::Model,
        entity::vehicle::Model,
    ),
    DbErr,
> {
    let character = crate::factory::character::create_character(db).await?;
    let planet = crate::factory::planet::create_planet(db).await?;
    let vehicle = crate::factory::vehicle::create_vehicle(db).await?;

    Ok((character, planet, vehicle))
}
