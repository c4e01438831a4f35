use super::*;

/// Tests deleting a planet and then deleting it again.
///
/// Expected: first delete Ok(true), second Ok(false)
#[tokio::test]
async fn deletes_planet_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_planet(db).await?;

    let repo = PlanetRepository::new(db);
    assert!(repo.delete(created.id).await?);
    assert!(!repo.delete(created.id).await?);

    let check = entity::prelude::Planet::find_by_id(created.id).one(db).await?;
    assert!(check.is_none());

    Ok(())
}
