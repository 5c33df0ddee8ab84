use super::*;

/// Tests writing changed fields back to a user.
///
/// Expected: Ok with the new name and email stored
#[tokio::test]
async fn updates_user_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(User {
            id: existing.id,
            name: "Renamed".to_string(),
            email: "renamed@example.com".to_string(),
        })
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.email, "renamed@example.com");
    assert_eq!(repo.find_by_id(existing.id).await?, Some(updated));

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update(User {
            id: 404,
            name: "Ghost".to_string(),
            email: "ghost@example.com".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
