use super::*;

/// Tests listing an item.
///
/// Expected: Ok with the item stored for its owner
#[tokio::test]
async fn creates_item() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ItemLocks::new();

    let owner = factory::user::create_user(db).await?;

    let service = ItemService::new(db, &locks);
    let item = service
        .create(CreateItemParam {
            owner_id: owner.id,
            name: Some("Drill".to_string()),
            description: Some("Cordless".to_string()),
            available: Some(true),
            request_id: None,
        })
        .await?;

    assert_eq!(item.owner_id, owner.id);
    assert_eq!(item.name, "Drill");
    assert!(item.available);

    Ok(())
}

/// Tests listing an item in answer to a request.
///
/// Expected: Ok for an existing request, Err(NotFound) for a missing one
#[tokio::test]
async fn links_existing_request_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ItemLocks::new();

    let owner = factory::user::create_user(db).await?;
    let requester = factory::user::create_user(db).await?;
    let request = factory::item_request::create_item_request(db, requester.id).await?;

    let service = ItemService::new(db, &locks);
    let param = |request_id| CreateItemParam {
        owner_id: owner.id,
        name: Some("Tent".to_string()),
        description: Some("Two person".to_string()),
        available: Some(true),
        request_id: Some(request_id),
    };

    let linked = service.create(param(request.id)).await?;
    let missing = service.create(param(request.id + 100)).await;

    assert_eq!(linked.request_id, Some(request.id));
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests item validation.
///
/// Expected: Err(BadRequest) for blank name, blank description and missing availability
#[tokio::test]
async fn rejects_incomplete_item() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ItemLocks::new();

    let owner = factory::user::create_user(db).await?;
    let complete = CreateItemParam {
        owner_id: owner.id,
        name: Some("Kayak".to_string()),
        description: Some("Single seat".to_string()),
        available: Some(true),
        request_id: None,
    };

    let service = ItemService::new(db, &locks);
    for param in [
        CreateItemParam {
            name: Some(" ".to_string()),
            ..complete.clone()
        },
        CreateItemParam {
            description: None,
            ..complete.clone()
        },
        CreateItemParam {
            available: None,
            ..complete.clone()
        },
    ] {
        let result = service.create(param).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    Ok(())
}

/// Tests listing an item for an owner that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ItemLocks::new();

    let service = ItemService::new(db, &locks);
    let result = service
        .create(CreateItemParam {
            owner_id: 77,
            name: Some("Drill".to_string()),
            description: Some("Cordless".to_string()),
            available: Some(true),
            request_id: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
