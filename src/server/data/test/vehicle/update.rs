use super::*;

/// Tests replacing every field of a vehicle.
///
/// Expected: Ok(Some) with updated values
#[tokio::test]
async fn replaces_vehicle_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::vehicle::VehicleFactory::new(db)
        .crew(46)
        .build()
        .await?;

    let repo = VehicleRepository::new(db);
    let updated = repo
        .update(created.id, save_param("Landspeeder"))
        .await?
        .unwrap();

    assert_eq!(updated.name, "Landspeeder");
    assert_eq!(updated.crew, 1);
    assert_eq!(updated.model_name, "X-34");

    Ok(())
}

/// Tests updating a vehicle that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VehicleRepository::new(db);
    assert!(repo.update(1, save_param("Ghost")).await?.is_none());

    Ok(())
}
