use super::*;

/// Tests getting a set of authors by id.
///
/// Verifies that only the requested authors are returned, ordered by first name
/// and then last name regardless of the order of the ids.
///
/// Expected: Ok with the two requested authors in name order
#[tokio::test]
async fn gets_requested_authors_in_name_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let zed = factory::author::AuthorFactory::new(db)
        .first_name("Zed")
        .build()
        .await?;
    let anna_b = factory::author::AuthorFactory::new(db)
        .first_name("Anna")
        .last_name("Bonny")
        .build()
        .await?;
    let anna_a = factory::author::AuthorFactory::new(db)
        .first_name("Anna")
        .last_name("Avery")
        .build()
        .await?;

    let repo = AuthorRepository::new(db);
    let result = repo.get_by_ids(&[zed.id, anna_b.id]).await?;

    let ids: Vec<Uuid> = result.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![anna_b.id, zed.id]);
    assert!(!ids.contains(&anna_a.id));

    Ok(())
}

/// Tests that unknown ids are skipped.
///
/// Expected: Ok with only the stored author
#[tokio::test]
async fn skips_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;

    let repo = AuthorRepository::new(db);
    let result = repo.get_by_ids(&[author.id, Uuid::new_v4()]).await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, author.id);

    Ok(())
}

/// Tests getting authors with an empty id list.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_author(db).await?;

    let repo = AuthorRepository::new(db);
    let result = repo.get_by_ids(&[]).await?;

    assert!(result.is_empty());

    Ok(())
}
