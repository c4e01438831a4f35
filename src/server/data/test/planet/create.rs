use super::*;

/// Tests creating a planet with a population beyond the 32-bit range.
///
/// Expected: Ok with population stored intact
#[tokio::test]
async fn stores_large_population() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);
    let planet = repo
        .create(save_param("Coruscant", Some(1_000_000_000_000)))
        .await?;

    let stored = repo.get_by_id(planet.id).await?.unwrap();
    assert_eq!(stored.population, Some(1_000_000_000_000));
    assert_eq!(stored.name, "Coruscant");

    Ok(())
}

/// Tests creating a planet with unknown population.
///
/// Expected: Ok with population None
#[tokio::test]
async fn stores_unknown_population() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);
    let planet = repo.create(save_param("Dagobah", None)).await?;

    assert_eq!(planet.population, None);
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
