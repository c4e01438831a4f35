use super::*;

/// Tests listing characters in ID order.
///
/// Expected: Ok with all characters ordered by ID
#[tokio::test]
async fn lists_characters_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::character::CharacterFactory::new(db)
        .name("Yoda")
        .build()
        .await?;
    let second = factory::character::CharacterFactory::new(db)
        .name("Ackbar")
        .build()
        .await?;

    let repo = CharacterRepository::new(db);
    let characters = repo.get_all().await?;

    let ids: Vec<_> = characters.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
