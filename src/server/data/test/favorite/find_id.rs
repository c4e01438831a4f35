use super::*;

/// Tests locating a favorite by owner, kind and target.
///
/// Expected: Ok(Some) with the matching favorite's ID
#[tokio::test]
async fn finds_matching_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    let favorite = factory::favorite::create_planet_favorite(db, user.id, planet.id).await?;

    let repo = FavoriteRepository::new(db);
    let found = repo
        .find_id(FavoriteParam {
            user_id: user.id,
            target: FavoriteTarget::Planet(planet.id),
        })
        .await?;

    assert_eq!(found, Some(favorite.id));

    Ok(())
}

/// Tests that the kind participates in matching.
///
/// A character and a planet can share an ID; a planet favorite must not be
/// found when looking for the character with the same ID.
///
/// Expected: Ok(None)
#[tokio::test]
async fn does_not_match_other_kind_with_same_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (character, planet, _vehicle) = factory::helpers::create_targets(db).await?;
    assert_eq!(character.id, planet.id);
    factory::favorite::create_planet_favorite(db, user.id, planet.id).await?;

    let repo = FavoriteRepository::new(db);
    let found = repo
        .find_id(FavoriteParam {
            user_id: user.id,
            target: FavoriteTarget::Character(character.id),
        })
        .await?;

    assert_eq!(found, None);

    Ok(())
}

/// Tests that another user's favorite is not matched.
///
/// Expected: Ok(None)
#[tokio::test]
async fn does_not_match_other_users_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let vehicle = factory::create_vehicle(db).await?;
    factory::favorite::create_vehicle_favorite(db, owner.id, vehicle.id).await?;

    let repo = FavoriteRepository::new(db);
    let found = repo
        .find_id(FavoriteParam {
            user_id: other.id,
            target: FavoriteTarget::Vehicle(vehicle.id),
        })
        .await?;

    assert_eq!(found, None);

    Ok(())
}

/// Tests that the oldest of several identical favorites is returned.
///
/// Expected: Ok(Some) with the lower of the two IDs
#[tokio::test]
async fn returns_lowest_id_for_duplicates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;
    let first = factory::favorite::create_character_favorite(db, user.id, character.id).await?;
    let second = factory::favorite::create_character_favorite(db, user.id, character.id).await?;
    assert!(first.id < second.id);

    let found = FavoriteRepository::new(db)
        .find_id(FavoriteParam {
            user_id: user.id,
            target: FavoriteTarget::Character(character.id),
        })
        .await?;

    assert_eq!(found, Some(first.id));

    Ok(())
}
