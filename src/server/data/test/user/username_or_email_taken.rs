use super::*;

/// Tests detection of a taken username or email.
///
/// Expected: true when either matches, false when neither does
#[tokio::test]
async fn detects_taken_username_or_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("leia")
        .email("leia@alderaan.gov")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.username_or_email_taken("leia", "new@mail.com").await?);
    assert!(repo.username_or_email_taken("new", "leia@alderaan.gov").await?);
    assert!(!repo.username_or_email_taken("new", "new@mail.com").await?);

    Ok(())
}
