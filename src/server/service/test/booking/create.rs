use super::*;

/// Tests requesting a booking of an available item.
///
/// Verifies that the booking starts WAITING and comes back with its item and booker,
/// and that fetching it as the booker returns the same dates.
///
/// Expected: Ok with WAITING booking
#[tokio::test]
async fn creates_waiting_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ItemLocks::new();

    let (_owner, item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::user::create_user(db).await?;
    let now = Utc::now();
    let start = now + Duration::hours(1);
    let end = now + Duration::hours(2);

    let service = BookingService::new(db, &locks);
    let created = service
        .create(create_param(booker.id, item.id, start, end), now)
        .await?;

    assert_eq!(created.booking.status, BookingStatus::Waiting);
    assert_eq!(created.item.id, item.id);
    assert_eq!(created.booker.id, booker.id);

    let fetched = service.get(created.booking.id, booker.id).await?;
    assert_eq!(fetched.booking.item_id, item.id);
    assert_eq!(fetched.booking.start, start);
    assert_eq!(fetched.booking.end, end);
    assert_eq!(fetched.booking.status, BookingStatus::Waiting);

    Ok(())
}

/// Tests that start must be strictly before end.
///
/// Expected: Err(BadRequest) for equal and reversed ranges
#[tokio::test]
async fn rejects_start_not_before_end() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ItemLocks::new();

    let (_owner, item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::user::create_user(db).await?;
    let now = Utc::now();
    let start = now + Duration::days(1);

    let service = BookingService::new(db, &locks);
    for end in [start, start - Duration::hours(1)] {
        let result = service
            .create(create_param(booker.id, item.id, start, end), now)
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    Ok(())
}

/// Tests the start-in-the-past rule and its one minute tolerance.
///
/// Expected: Err(BadRequest) two minutes in the past, Ok thirty seconds in the past
#[tokio::test]
async fn rejects_start_in_the_past_beyond_tolerance() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ItemLocks::new();

    let (_owner, item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::user::create_user(db).await?;
    let now = Utc::now();
    let end = now + Duration::hours(1);

    let service = BookingService::new(db, &locks);
    let too_old = service
        .create(
            create_param(booker.id, item.id, now - Duration::minutes(2), end),
            now,
        )
        .await;
    let within_tolerance = service
        .create(
            create_param(booker.id, item.id, now - Duration::seconds(30), end),
            now,
        )
        .await;

    assert!(matches!(too_old, Err(AppError::BadRequest(_))));
    assert!(within_tolerance.is_ok());

    Ok(())
}

/// Tests that missing fields are reported before anything is looked up.
///
/// Expected: Err(BadRequest) even though neither booker nor item exist
#[tokio::test]
async fn rejects_missing_fields_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ItemLocks::new();
    let now = Utc::now();

    let service = BookingService::new(db, &locks);
    let without_item = service
        .create(
            CreateBookingParam {
                booker_id: 1,
                item_id: None,
                start: Some(now + Duration::hours(1)),
                end: Some(now + Duration::hours(2)),
            },
            now,
        )
        .await;
    let without_end = service
        .create(
            CreateBookingParam {
                booker_id: 1,
                item_id: Some(1),
                start: Some(now + Duration::hours(1)),
                end: None,
            },
            now,
        )
        .await;

    assert!(matches!(without_item, Err(AppError::BadRequest(_))));
    assert!(matches!(without_end, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests booking by a user that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_booker() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ItemLocks::new();

    let (_owner, item) = factory::helpers::create_item_with_owner(db).await?;
    let now = Utc::now();

    let service = BookingService::new(db, &locks);
    let result = service
        .create(
            create_param(999, item.id, now + Duration::hours(1), now + Duration::hours(2)),
            now,
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests booking an item that does not exist.
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

    let booker = factory::user::create_user(db).await?;
    let now = Utc::now();

    let service = BookingService::new(db, &locks);
    let result = service
        .create(
            create_param(booker.id, 999, now + Duration::hours(1), now + Duration::hours(2)),
            now,
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests booking an unavailable item.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_unavailable_item() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ItemLocks::new();

    let owner = factory::user::create_user(db).await?;
    let item = factory::item::ItemFactory::new(db, owner.id)
        .available(false)
        .build()
        .await?;
    let booker = factory::user::create_user(db).await?;
    let now = Utc::now();

    let service = BookingService::new(db, &locks);
    let result = service
        .create(
            create_param(booker.id, item.id, now + Duration::hours(1), now + Duration::hours(2)),
            now,
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that an owner cannot book their own item.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_self_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ItemLocks::new();

    let (owner, item) = factory::helpers::create_item_with_owner(db).await?;
    let now = Utc::now();

    let service = BookingService::new(db, &locks);
    let result = service
        .create(
            create_param(owner.id, item.id, now + Duration::hours(1), now + Duration::hours(2)),
            now,
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
