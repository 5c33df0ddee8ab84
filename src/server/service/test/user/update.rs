use super::*;

/// Tests a partial update touching only the name.
///
/// Expected: Ok with new name and unchanged email
#[tokio::test]
async fn updates_name_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::create_user(db).await?;

    let service = UserService::new(db);
    let updated = service
        .update(UpdateUserParam {
            id: existing.id,
            name: Some("Renamed".to_string()),
            email: None,
        })
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.email, existing.email);

    Ok(())
}

/// Tests keeping one's own email in an update.
///
/// Expected: Ok
#[tokio::test]
async fn allows_own_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::create_user(db).await?;

    let service = UserService::new(db);
    let result = service
        .update(UpdateUserParam {
            id: existing.id,
            name: None,
            email: Some(existing.email.clone()),
        })
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests taking over another user's email.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_email_of_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;

    let service = UserService::new(db);
    let result = service
        .update(UpdateUserParam {
            id: second.id,
            name: None,
            email: Some(first.email),
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests update validation and missing users.
///
/// Expected: Err(BadRequest) for a blank email, Err(NotFound) for an unknown ID
#[tokio::test]
async fn rejects_blank_email_and_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::create_user(db).await?;

    let service = UserService::new(db);
    let blank = service
        .update(UpdateUserParam {
            id: existing.id,
            name: None,
            email: Some(" ".to_string()),
        })
        .await;
    let missing = service
        .update(UpdateUserParam {
            id: 404,
            name: Some("Ghost".to_string()),
            email: None,
        })
        .await;

    assert!(matches!(blank, Err(AppError::BadRequest(_))));
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}
