use super::*;

/// Tests listing only the given user's favorites in ID order.
///
/// Expected: Ok with the owner's favorites only
#[tokio::test]
async fn lists_only_owned_favorites() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let (character, planet, vehicle) = factory::helpers::create_targets(db).await?;

    factory::favorite::create_vehicle_favorite(db, owner.id, vehicle.id).await?;
    factory::favorite::create_planet_favorite(db, other.id, planet.id).await?;
    factory::favorite::create_character_favorite(db, owner.id, character.id).await?;

    let repo = FavoriteRepository::new(db);
    let favorites = repo.list_by_user(owner.id).await?;

    let targets: Vec<_> = favorites.iter().map(|f| f.target).collect();
    assert_eq!(
        targets,
        vec![
            FavoriteTarget::Vehicle(vehicle.id),
            FavoriteTarget::Character(character.id),
        ]
    );
    assert!(favorites.iter().all(|f| f.user_id == owner.id));

    Ok(())
}

/// Tests that a stored row with an unknown tag surfaces as an internal error.
///
/// Expected: Err(InternalErr(UnknownFavoriteKind))
#[tokio::test]
async fn fails_for_unknown_stored_tag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;
    factory::favorite::create_favorite_row(db, user.id, "starships", Some(character.id), None, None)
        .await?;

    let repo = FavoriteRepository::new(db);
    let result = repo.list_by_user(user.id).await;

    assert!(matches!(
        result,
        Err(AppError::InternalErr(InternalError::UnknownFavoriteKind { .. }))
    ));

    Ok(())
}
