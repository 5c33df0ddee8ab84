use super::*;

/// Tests the owner's view of an item.
///
/// Expected: Ok with last and next approved bookings filled in
#[tokio::test]
async fn owner_sees_last_and_next_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ItemLocks::new();

    let (owner, item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::user::create_user(db).await?;
    let now = Utc::now();

    let last = factory::booking::BookingFactory::new(db, item.id, booker.id)
        .start(now - Duration::days(3))
        .end(now - Duration::days(2))
        .status(BookingStatusEntity::Approved)
        .build()
        .await?;
    let next = factory::booking::BookingFactory::new(db, item.id, booker.id)
        .start(now + Duration::days(2))
        .end(now + Duration::days(3))
        .status(BookingStatusEntity::Approved)
        .build()
        .await?;

    let service = ItemService::new(db, &locks);
    let as_owner = service.get(item.id, owner.id, now).await?;
    let as_booker = service.get(item.id, booker.id, now).await?;

    assert_eq!(as_owner.last_booking.map(|b| b.id), Some(last.id));
    assert_eq!(as_owner.next_booking.map(|b| b.id), Some(next.id));
    assert!(as_booker.last_booking.is_none());
    assert!(as_booker.next_booking.is_none());

    Ok(())
}

/// Tests reading an item that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_item() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ItemLocks::new();

    let user = factory::user::create_user(db).await?;

    let service = ItemService::new(db, &locks);
    let result = service.get(404, user.id, Utc::now()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests listing an owner's item cards.
///
/// Expected: Ok with owned items in ID order, each with its comments
#[tokio::test]
async fn lists_owner_cards_with_comments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ItemLocks::new();

    let (owner, first) = factory::helpers::create_item_with_owner(db).await?;
    let second = factory::item::create_item(db, owner.id).await?;
    let author = factory::user::create_user(db).await?;
    factory::comment::create_comment(db, second.id, author.id).await?;

    let service = ItemService::new(db, &locks);
    let cards = service.get_by_owner(owner.id, Utc::now()).await?;

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].item.id, first.id);
    assert!(cards[0].comments.is_empty());
    assert_eq!(cards[1].item.id, second.id);
    assert_eq!(cards[1].comments.len(), 1);
    assert_eq!(cards[1].comments[0].author_name, author.name);

    let missing = service.get_by_owner(999, Utc::now()).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}
