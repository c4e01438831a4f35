use super::*;

/// Tests replacing every field of a character.
///
/// Verifies that optional fields omitted from the update are cleared.
///
/// Expected: Ok(Some) with updated fields
#[tokio::test]
async fn replaces_character_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_character(db).await?;
    assert!(created.skin_color.is_some());

    let repo = CharacterRepository::new(db);
    let mut param = save_param("Darth Vader");
    param.hair_color = None;
    let updated = repo.update(created.id, param).await?.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Darth Vader");
    assert_eq!(updated.hair_color, None);
    assert_eq!(updated.skin_color, None);

    Ok(())
}

/// Tests updating a character that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let result = repo.update(42, save_param("Nobody")).await?;

    assert!(result.is_none());

    Ok(())
}
