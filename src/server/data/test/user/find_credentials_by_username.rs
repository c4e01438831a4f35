use super::*;

/// Tests that credentials carry the stored password column.
///
/// Expected: Ok(Some) with password equal to the stored value
#[tokio::test]
async fn returns_stored_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("han")
        .password("aa$bb")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let credentials = repo.find_credentials_by_username("han").await?.unwrap();

    assert_eq!(credentials.user.id, user.id);
    assert_eq!(credentials.password, "aa$bb");

    Ok(())
}

/// Tests that usernames are matched exactly.
///
/// Expected: Ok(None) for a different username
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("han")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let credentials = repo.find_credentials_by_username("chewie").await?;

    assert!(credentials.is_none());

    Ok(())
}
