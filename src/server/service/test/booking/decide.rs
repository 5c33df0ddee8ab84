use super::*;

/// Tests the full approve scenario.
///
/// The owner approves a WAITING booking; the booker then tries to decide it and is
/// denied; the owner tries to reject it afterwards and is refused because it is no
/// longer WAITING.
///
/// Expected: Ok(APPROVED), then Err(AccessDenied), then Err(BadRequest)
#[tokio::test]
async fn approves_once_and_only_by_owner() -> Result<(), AppError> {
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

    let service = BookingService::new(db, &locks);
    let created = service
        .create(
            create_param(booker.id, item.id, now + Duration::hours(1), now + Duration::hours(2)),
            now,
        )
        .await?;
    let booking_id = created.booking.id;

    let approved = service
        .decide(DecideBookingParam {
            booking_id,
            actor_id: owner.id,
            approved: true,
        })
        .await?;
    assert_eq!(approved.booking.status, BookingStatus::Approved);

    let by_booker = service
        .decide(DecideBookingParam {
            booking_id,
            actor_id: booker.id,
            approved: true,
        })
        .await;
    assert!(matches!(
        by_booker,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == booker.id
    ));

    let again = service
        .decide(DecideBookingParam {
            booking_id,
            actor_id: owner.id,
            approved: false,
        })
        .await;
    assert!(matches!(again, Err(AppError::BadRequest(_))));

    let stored = service.get(booking_id, owner.id).await?;
    assert_eq!(stored.booking.status, BookingStatus::Approved);

    Ok(())
}

/// Tests rejecting a booking.
///
/// Expected: Ok with REJECTED status
#[tokio::test]
async fn rejects_waiting_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ItemLocks::new();

    let (owner, _booker, _item, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let service = BookingService::new(db, &locks);
    let decided = service
        .decide(DecideBookingParam {
            booking_id: booking.id,
            actor_id: owner.id,
            approved: false,
        })
        .await?;

    assert_eq!(decided.booking.status, BookingStatus::Rejected);

    Ok(())
}

/// Tests that a repeated identical decision is refused.
///
/// Expected: Err(BadRequest) on approving an already APPROVED booking
#[tokio::test]
async fn refuses_repeated_same_decision() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ItemLocks::new();

    let (owner, booker, item, _booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let approved = factory::booking::BookingFactory::new(db, item.id, booker.id)
        .status(BookingStatusEntity::Approved)
        .build()
        .await?;

    let service = BookingService::new(db, &locks);
    let result = service
        .decide(DecideBookingParam {
            booking_id: approved.id,
            actor_id: owner.id,
            approved: true,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a non-owner is denied even on a WAITING booking.
///
/// Expected: Err(AccessDenied) and status still WAITING
#[tokio::test]
async fn denies_non_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ItemLocks::new();

    let (owner, _booker, _item, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let stranger = factory::user::create_user(db).await?;

    let service = BookingService::new(db, &locks);
    let result = service
        .decide(DecideBookingParam {
            booking_id: booking.id,
            actor_id: stranger.id,
            approved: true,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    let stored = service.get(booking.id, owner.id).await?;
    assert_eq!(stored.booking.status, BookingStatus::Waiting);

    Ok(())
}

/// Tests deciding a booking that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ItemLocks::new();

    let owner = factory::user::create_user(db).await?;

    let service = BookingService::new(db, &locks);
    let result = service
        .decide(DecideBookingParam {
            booking_id: 31337,
            actor_id: owner.id,
            approved: true,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that approval is refused when it would overlap an approved booking.
///
/// Rejecting the same booking is still allowed.
///
/// Expected: Err(BadRequest) on approve, Ok(REJECTED) on reject
#[tokio::test]
async fn refuses_overlapping_approval() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ItemLocks::new();

    let (owner, item) = factory::helpers::create_item_with_owner(db).await?;
    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;
    let start = Utc::now() + Duration::days(1);
    let end = start + Duration::days(2);

    factory::booking::BookingFactory::new(db, item.id, first.id)
        .start(start)
        .end(end)
        .status(BookingStatusEntity::Approved)
        .build()
        .await?;
    let competing = factory::booking::BookingFactory::new(db, item.id, second.id)
        .start(start + Duration::days(1))
        .end(end + Duration::days(1))
        .build()
        .await?;

    let service = BookingService::new(db, &locks);
    let approve = service
        .decide(DecideBookingParam {
            booking_id: competing.id,
            actor_id: owner.id,
            approved: true,
        })
        .await;
    assert!(matches!(approve, Err(AppError::BadRequest(_))));

    let reject = service
        .decide(DecideBookingParam {
            booking_id: competing.id,
            actor_id: owner.id,
            approved: false,
        })
        .await?;
    assert_eq!(reject.booking.status, BookingStatus::Rejected);

    Ok(())
}

/// Tests two concurrent decisions on the same booking.
///
/// Expected: exactly one decision succeeds
#[tokio::test]
async fn concurrent_decisions_apply_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ItemLocks::new();

    let (owner, _booker, _item, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let service = BookingService::new(db, &locks);
    let (approve, reject) = tokio::join!(
        service.decide(DecideBookingParam {
            booking_id: booking.id,
            actor_id: owner.id,
            approved: true,
        }),
        service.decide(DecideBookingParam {
            booking_id: booking.id,
            actor_id: owner.id,
            approved: false,
        }),
    );

    assert_eq!(
        [approve.is_ok(), reject.is_ok()]
            .iter()
            .filter(|ok| **ok)
            .count(),
        1
    );

    Ok(())
}

/// Tests two concurrent approvals of different WAITING bookings whose ranges overlap.
///
/// Both bookings are of the same item, so approving one makes the other overlap an
/// approved booking.
///
/// Expected: exactly one approval succeeds, the other fails with Err(BadRequest)
#[tokio::test]
async fn concurrent_overlapping_approvals_apply_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ItemLocks::new();

    let (owner, item) = factory::helpers::create_item_with_owner(db).await?;
    let first_booker = factory::user::create_user(db).await?;
    let second_booker = factory::user::create_user(db).await?;
    let start = Utc::now() + Duration::days(1);
    let end = start + Duration::days(2);

    let first = factory::booking::BookingFactory::new(db, item.id, first_booker.id)
        .start(start)
        .end(end)
        .build()
        .await?;
    let second = factory::booking::BookingFactory::new(db, item.id, second_booker.id)
        .start(start + Duration::days(1))
        .end(end + Duration::days(1))
        .build()
        .await?;

    let service = BookingService::new(db, &locks);
    let (first_result, second_result) = tokio::join!(
        service.decide(DecideBookingParam {
            booking_id: first.id,
            actor_id: owner.id,
            approved: true,
        }),
        service.decide(DecideBookingParam {
            booking_id: second.id,
            actor_id: owner.id,
            approved: true,
        }),
    );

    let outcomes = [first_result, second_result];
    assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(outcomes
        .iter()
        .any(|r| matches!(r, Err(AppError::BadRequest(_)))));

    Ok(())
}
