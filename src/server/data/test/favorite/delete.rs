use super::*;

/// Tests deleting a favorite by ID.
///
/// Expected: Ok with the row removed and other favorites untouched
#[tokio::test]
async fn deletes_only_given_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (character, planet, _vehicle) = factory::helpers::create_targets(db).await?;
    let fav_char = factory::favorite::create_character_favorite(db, user.id, character.id).await?;
    let fav_planet = factory::favorite::create_planet_favorite(db, user.id, planet.id).await?;

    let repo = FavoriteRepository::new(db);
    repo.delete(fav_char.id).await?;

    let remaining = repo.list_by_user(user.id).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, fav_planet.id);

    Ok(())
}
