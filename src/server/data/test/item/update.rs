use super::*;

/// Tests updating an item's editable fields.
///
/// Verifies that name, description and availability change while owner and
/// request stay as created.
///
/// Expected: Ok with editable fields changed and ownership kept
#[tokio::test]
async fn updates_editable_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, item) = factory::helpers::create_item_with_owner(db).await?;

    let repo = ItemRepository::new(db);
    let mut changed = repo.find_by_id(item.id).await?.unwrap();
    changed.name = "Cordless drill".to_string();
    changed.description = "18V with two batteries".to_string();
    changed.available = false;

    let updated = repo.update(changed).await?;

    assert_eq!(updated.name, "Cordless drill");
    assert_eq!(updated.description, "18V with two batteries");
    assert!(!updated.available);
    assert_eq!(updated.owner_id, owner.id);
    assert_eq!(updated.request_id, None);

    Ok(())
}

/// Tests listing an owner's items.
///
/// Expected: Ok with only that owner's items in ID order
#[tokio::test]
async fn lists_items_by_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, first) = factory::helpers::create_item_with_owner(db).await?;
    let second = factory::item::create_item(db, owner.id).await?;
    factory::helpers::create_item_with_owner(db).await?;

    let repo = ItemRepository::new(db);
    let ids: Vec<i32> = repo
        .get_by_owner(owner.id)
        .await?
        .into_iter()
        .map(|i| i.id)
        .collect();

    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
