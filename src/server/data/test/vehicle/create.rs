use super::*;

/// Tests creating a vehicle.
///
/// Verifies the model designation is written to the `model` column.
///
/// Expected: Ok with vehicle created
#[tokio::test]
async fn creates_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VehicleRepository::new(db);
    let vehicle = repo.create(save_param("Landspeeder")).await?;

    let stored = entity::prelude::Vehicle::find_by_id(vehicle.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.model_name, "X-34");
    assert_eq!(vehicle.crew, 1);

    Ok(())
}
