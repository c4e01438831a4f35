use super::*;

/// Tests deleting a character.
///
/// Expected: Ok(true) and row removed
#[tokio::test]
async fn deletes_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_character(db).await?;

    let repo = CharacterRepository::new(db);
    assert!(repo.delete(created.id).await?);

    let check = entity::prelude::Character::find_by_id(created.id)
        .one(db)
        .await?;
    assert!(check.is_none());

    Ok(())
}

/// Tests deleting a character that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    assert!(!repo.delete(7).await?);

    Ok(())
}

/// Tests that deleting a character cascades to favorites pointing at it.
///
/// Expected: Ok with the favorite row removed
#[tokio::test]
async fn cascades_to_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;
    let favorite =
        factory::favorite::create_character_favorite(db, user.id, character.id).await?;

    let repo = CharacterRepository::new(db);
    repo.delete(character.id).await?;

    let check = entity::prelude::Favorite::find_by_id(favorite.id)
        .one(db)
        .await?;
    assert!(check.is_none());

    Ok(())
}
