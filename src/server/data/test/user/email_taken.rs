use super::*;

/// Tests email collision detection.
///
/// Verifies that an email counts as taken by another user but not by the user
/// holding it when that user is excluded.
///
/// Expected: Ok(true) for other users, Ok(false) for the holder
#[tokio::test]
async fn detects_email_of_other_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let holder = factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.email_taken("taken@example.com", None).await?);
    assert!(!repo.email_taken("taken@example.com", Some(holder.id)).await?);
    assert!(!repo.email_taken("free@example.com", None).await?);

    Ok(())
}
