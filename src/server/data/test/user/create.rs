use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository inserts the user as active and returns
/// the stored profile fields.
///
/// Expected: Ok with active user
#[tokio::test]
async fn creates_active_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(create_param("luke", "luke@tatooine.net"))
        .await?;

    assert_eq!(user.username, "luke");
    assert_eq!(user.email, "luke@tatooine.net");
    assert_eq!(user.firstname, "Luke");
    assert_eq!(user.is_active, Some(true));

    Ok(())
}

/// Tests that a duplicate username is rejected by the unique constraint.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_param("luke", "luke@tatooine.net"))
        .await?;
    let result = repo.create(create_param("luke", "other@tatooine.net")).await;

    assert!(result.is_err());

    Ok(())
}
