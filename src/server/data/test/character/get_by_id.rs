use super::*;

/// Tests fetching a character by ID.
///
/// Expected: Ok(Some) for an existing ID, Ok(None) otherwise
#[tokio::test]
async fn gets_character_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_character(db).await?;

    let repo = CharacterRepository::new(db);

    let found = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(found.name, created.name);
    assert!(repo.get_by_id(created.id + 1).await?.is_none());

    Ok(())
}
