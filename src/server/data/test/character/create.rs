use super::*;

/// Tests creating a character.
///
/// Verifies that optional fields left as None are stored as null.
///
/// Expected: Ok with character created
#[tokio::test]
async fn creates_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let character = repo.create(save_param("Luke Skywalker")).await?;

    assert_eq!(character.name, "Luke Skywalker");
    assert_eq!(character.hair_color, Some("blond".to_string()));
    assert_eq!(character.birth_year, None);

    let stored = entity::prelude::Character::find_by_id(character.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.skin_color, None);

    Ok(())
}
