use super::*;

/// Tests search with blank and matching text.
///
/// Expected: empty for blank text, matching available items otherwise
#[tokio::test]
async fn searches_available_items() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ItemLocks::new();

    let owner = factory::user::create_user(db).await?;
    let saw = factory::item::ItemFactory::new(db, owner.id)
        .name("Circular saw")
        .build()
        .await?;

    let service = ItemService::new(db, &locks);

    assert!(service.search("   ").await?.is_empty());
    let found = service.search("saw").await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, saw.id);

    Ok(())
}
