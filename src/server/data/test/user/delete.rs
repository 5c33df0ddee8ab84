use super::*;

/// Tests deleting a user.
///
/// Expected: Ok(true) then the user no longer exists
#[tokio::test]
async fn deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.delete(user.id).await?);
    assert!(!repo.exists(user.id).await?);

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.delete(12).await?);

    Ok(())
}

/// Tests listing users after a delete.
///
/// Expected: Ok with remaining users in ID order
#[tokio::test]
async fn get_all_lists_remaining_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;
    let third = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.delete(second.id).await?;

    let ids: Vec<i32> = repo.get_all().await?.into_iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![first.id, third.id]);

    Ok(())
}
