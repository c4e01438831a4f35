use super::*;

/// Tests target existence checks against each target table.
///
/// Expected: true for created targets, false for unknown IDs
#[tokio::test]
async fn checks_each_target_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (character, planet, vehicle) = factory::helpers::create_targets(db).await?;

    let repo = FavoriteRepository::new(db);

    assert!(repo.target_exists(FavoriteTarget::Character(character.id)).await?);
    assert!(repo.target_exists(FavoriteTarget::Planet(planet.id)).await?);
    assert!(repo.target_exists(FavoriteTarget::Vehicle(vehicle.id)).await?);
    assert!(!repo.target_exists(FavoriteTarget::Planet(planet.id + 50)).await?);

    Ok(())
}
