use super::*;

/// Tests creating a favorite of each kind.
///
/// Verifies that only the column matching the target is populated and the
/// stored tag matches the kind.
///
/// Expected: Ok with exactly one target column set per row
#[tokio::test]
async fn populates_only_matching_column() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (character, planet, vehicle) = factory::helpers::create_targets(db).await?;

    let repo = FavoriteRepository::new(db);
    for target in [
        FavoriteTarget::Character(character.id),
        FavoriteTarget::Planet(planet.id),
        FavoriteTarget::Vehicle(vehicle.id),
    ] {
        let favorite = repo
            .create(FavoriteParam {
                user_id: user.id,
                target,
            })
            .await?;
        assert_eq!(favorite.target, target);

        let row = entity::prelude::Favorite::find_by_id(favorite.id)
            .one(db)
            .await?
            .unwrap();
        assert_eq!(row.kind, target.kind().tag());
        assert_eq!(
            (row.char_id, row.planet_id, row.vehicle_id),
            target.columns()
        );
    }

    Ok(())
}

/// Tests that a favorite pointing at a missing target is rejected by the foreign key.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_missing_target() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    let result = repo
        .create(FavoriteParam {
            user_id: user.id,
            target: FavoriteTarget::Planet(404),
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
