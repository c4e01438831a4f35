use super::*;

/// Tests that users are listed ordered by username.
///
/// Expected: Ok with users sorted alphabetically
#[tokio::test]
async fn orders_users_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for username in ["yoda", "anakin", "obiwan"] {
        factory::user::UserFactory::new(db)
            .username(username)
            .build()
            .await?;
    }

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    let usernames: Vec<_> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(usernames, vec!["anakin", "obiwan", "yoda"]);

    Ok(())
}

/// Tests listing users on an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    assert!(users.is_empty());

    Ok(())
}
