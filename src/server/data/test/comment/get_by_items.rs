use super::*;

/// Tests loading comments with author names.
///
/// Expected: Ok with comments oldest first and author names resolved
#[tokio::test]
async fn loads_comments_with_author_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item) = factory::helpers::create_item_with_owner(db).await?;
    let author = factory::user::UserFactory::new(db)
        .name("Marta")
        .build()
        .await?;
    let now = Utc::now();

    let repo = CommentRepository::new(db);
    let newer = repo
        .create(item.id, author.id, "Second".to_string(), now)
        .await?;
    let older = repo
        .create(item.id, author.id, "First".to_string(), now - Duration::hours(1))
        .await?;

    let comments = repo.get_by_item(item.id).await?;

    let ids: Vec<i32> = comments.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![older.id, newer.id]);
    assert!(comments.iter().all(|c| c.author_name == "Marta"));
    assert_eq!(comments[0].text, "First");

    Ok(())
}

/// Tests grouping comments of several items.
///
/// Expected: Ok with one entry per commented item and none for uncommented ones
#[tokio::test]
async fn groups_comments_by_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, first) = factory::helpers::create_item_with_owner(db).await?;
    let second = factory::item::create_item(db, owner.id).await?;
    let quiet = factory::item::create_item(db, owner.id).await?;
    let author = factory::user::create_user(db).await?;

    factory::comment::create_comment(db, first.id, author.id).await?;
    factory::comment::create_comment(db, first.id, author.id).await?;
    factory::comment::create_comment(db, second.id, author.id).await?;

    let repo = CommentRepository::new(db);
    let grouped = repo
        .get_by_items(&[first.id, second.id, quiet.id])
        .await?;

    assert_eq!(grouped.get(&first.id).map(Vec::len), Some(2));
    assert_eq!(grouped.get(&second.id).map(Vec::len), Some(1));
    assert!(!grouped.contains_key(&quiet.id));

    Ok(())
}
