use super::*;

/// Tests replacing every field of a planet.
///
/// Expected: Ok(Some) for an existing planet, Ok(None) for a missing one
#[tokio::test]
async fn updates_existing_planet_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_planet(db).await?;

    let repo = PlanetRepository::new(db);
    let updated = repo
        .update(created.id, save_param("Hoth", None))
        .await?
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Hoth");
    assert_eq!(updated.population, None);

    assert!(repo
        .update(created.id + 100, save_param("Nowhere", None))
        .await?
        .is_none());

    Ok(())
}
