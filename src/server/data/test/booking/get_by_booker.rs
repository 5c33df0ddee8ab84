use super::*;

/// Tests listing all bookings of a booker.
///
/// Verifies that ALL returns every booking the user made, newest ID first, and
/// nothing made by other users.
///
/// Expected: Ok with own bookings in descending ID order
#[tokio::test]
async fn lists_all_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let first = factory::booking::create_booking(db, item.id, booker.id).await?;
    let second = factory::booking::create_booking(db, item.id, booker.id).await?;
    factory::booking::create_booking(db, item.id, other.id).await?;

    let repo = BookingRepository::new(db);
    let bookings = repo
        .get_by_booker(booker.id, BookingState::All, Utc::now(), Page::unbounded())
        .await?;

    let ids: Vec<i32> = bookings.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}

/// Tests the temporal state filters.
///
/// Seeds one past, one current and one future booking and checks that each of
/// PAST, CURRENT and FUTURE selects exactly its own booking.
///
/// Expected: Ok with one booking per temporal state
#[tokio::test]
async fn filters_by_temporal_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::user::create_user(db).await?;
    let now = Utc::now();

    let past = factory::booking::BookingFactory::new(db, item.id, booker.id)
        .start(now - Duration::days(3))
        .end(now - Duration::days(2))
        .build()
        .await?;
    let current = factory::booking::BookingFactory::new(db, item.id, booker.id)
        .start(now - Duration::hours(1))
        .end(now + Duration::hours(1))
        .build()
        .await?;
    let future = factory::booking::BookingFactory::new(db, item.id, booker.id)
        .start(now + Duration::days(2))
        .end(now + Duration::days(3))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    for (state, expected) in [
        (BookingState::Past, past.id),
        (BookingState::Current, current.id),
        (BookingState::Future, future.id),
    ] {
        let bookings = repo
            .get_by_booker(booker.id, state, now, Page::unbounded())
            .await?;
        let ids: Vec<i32> = bookings.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![expected], "state {state}");
    }

    Ok(())
}

/// Tests the boundaries of the CURRENT filter.
///
/// A booking starting exactly at `now` is current; one ending exactly at `now` is
/// neither current nor past.
///
/// Expected: Ok with only the booking starting at `now` listed as CURRENT
#[tokio::test]
async fn current_includes_start_and_excludes_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::user::create_user(db).await?;
    let now = Utc::now();

    let starting = factory::booking::BookingFactory::new(db, item.id, booker.id)
        .start(now)
        .end(now + Duration::hours(1))
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, item.id, booker.id)
        .start(now - Duration::hours(1))
        .end(now)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let current = repo
        .get_by_booker(booker.id, BookingState::Current, now, Page::unbounded())
        .await?;
    let past = repo
        .get_by_booker(booker.id, BookingState::Past, now, Page::unbounded())
        .await?;

    assert_eq!(current.len(), 1);
    assert_eq!(current[0].id, starting.id);
    assert!(past.is_empty());

    Ok(())
}

/// Tests the status filters.
///
/// Expected: Ok with WAITING and REJECTED selecting bookings by status only
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::user::create_user(db).await?;

    let waiting = factory::booking::create_booking(db, item.id, booker.id).await?;
    let rejected = factory::booking::BookingFactory::new(db, item.id, booker.id)
        .status(BookingStatusEntity::Rejected)
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, item.id, booker.id)
        .status(BookingStatusEntity::Approved)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let now = Utc::now();
    let waiting_list = repo
        .get_by_booker(booker.id, BookingState::Waiting, now, Page::unbounded())
        .await?;
    let rejected_list = repo
        .get_by_booker(booker.id, BookingState::Rejected, now, Page::unbounded())
        .await?;

    assert_eq!(waiting_list.len(), 1);
    assert_eq!(waiting_list[0].id, waiting.id);
    assert_eq!(rejected_list.len(), 1);
    assert_eq!(rejected_list[0].id, rejected.id);

    Ok(())
}

/// Tests that non-ALL states order by end date descending.
///
/// Expected: Ok with the latest-ending booking first
#[tokio::test]
async fn orders_filtered_states_by_end_desc() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::user::create_user(db).await?;
    let now = Utc::now();

    let ends_later = factory::booking::BookingFactory::new(db, item.id, booker.id)
        .start(now + Duration::days(1))
        .end(now + Duration::days(5))
        .build()
        .await?;
    let ends_sooner = factory::booking::BookingFactory::new(db, item.id, booker.id)
        .start(now + Duration::days(2))
        .end(now + Duration::days(3))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let bookings = repo
        .get_by_booker(booker.id, BookingState::Future, now, Page::unbounded())
        .await?;

    let ids: Vec<i32> = bookings.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![ends_later.id, ends_sooner.id]);

    Ok(())
}

/// Tests paginating a booker's listing.
///
/// Expected: Ok with the requested window of the ordered result
#[tokio::test]
async fn paginates_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::user::create_user(db).await?;

    let mut created = Vec::new();
    for _ in 0..5 {
        created.push(factory::booking::create_booking(db, item.id, booker.id).await?);
    }

    let repo = BookingRepository::new(db);
    let now = Utc::now();
    let page = repo
        .get_by_booker(booker.id, BookingState::All, now, Page::new(1, Some(2)))
        .await?;
    let tail = repo
        .get_by_booker(booker.id, BookingState::All, now, Page::new(3, None))
        .await?;

    let page_ids: Vec<i32> = page.iter().map(|b| b.id).collect();
    let tail_ids: Vec<i32> = tail.iter().map(|b| b.id).collect();
    assert_eq!(page_ids, vec![created[3].id, created[2].id]);
    assert_eq!(tail_ids, vec![created[1].id, created[0].id]);

    Ok(())
}
