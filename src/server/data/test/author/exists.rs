use super::*;

/// Tests the existence check for stored and unknown authors.
///
/// Expected: true for the stored author, false otherwise
#[tokio::test]
async fn reports_whether_author_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;

    let repo = AuthorRepository::new(db);

    assert!(repo.exists(author.id).await?);
    assert!(!repo.exists(Uuid::new_v4()).await?);

    Ok(())
}
