use super::*;

/// Tests approving a WAITING booking.
///
/// Expected: Ok(true) with status stored as APPROVED
#[tokio::test]
async fn approves_waiting_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _booker, _item, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let changed = repo
        .update_status_if_waiting(booking.id, BookingStatus::Approved)
        .await?;

    assert!(changed);
    let stored = repo.find_by_id(booking.id).await?.unwrap();
    assert_eq!(stored.status, BookingStatus::Approved);

    Ok(())
}

/// Tests rejecting a WAITING booking.
///
/// Expected: Ok(true) with status stored as REJECTED
#[tokio::test]
async fn rejects_waiting_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _booker, _item, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let changed = repo
        .update_status_if_waiting(booking.id, BookingStatus::Rejected)
        .await?;

    assert!(changed);
    let stored = repo.find_by_id(booking.id).await?.unwrap();
    assert_eq!(stored.status, BookingStatus::Rejected);

    Ok(())
}

/// Tests deciding a booking a second time.
///
/// Verifies that once a booking has left WAITING, a later update matches no row and
/// leaves the first decision in place.
///
/// Expected: Ok(false) with the first decision preserved
#[tokio::test]
async fn does_not_change_decided_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _booker, _item, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    assert!(
        repo.update_status_if_waiting(booking.id, BookingStatus::Rejected)
            .await?
    );

    let changed = repo
        .update_status_if_waiting(booking.id, BookingStatus::Approved)
        .await?;

    assert!(!changed);
    let stored = repo.find_by_id(booking.id).await?.unwrap();
    assert_eq!(stored.status, BookingStatus::Rejected);

    Ok(())
}

/// Tests deciding a booking that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);
    let changed = repo
        .update_status_if_waiting(77, BookingStatus::Approved)
        .await?;

    assert!(!changed);

    Ok(())
}
