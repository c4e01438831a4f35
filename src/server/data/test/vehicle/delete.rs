use super::*;

/// Tests deleting a vehicle.
///
/// Expected: Ok(true) and row removed
#[tokio::test]
async fn deletes_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_vehicle(db).await?;

    let repo = VehicleRepository::new(db);
    assert!(repo.delete(created.id).await?);
    assert!(repo.get_by_id(created.id).await?.is_none());
    assert!(entity::prelude::Vehicle::find().all(db).await?.is_empty());

    Ok(())
}
