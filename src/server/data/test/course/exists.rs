use super::*;

/// Tests the existence check, which ignores the owning author.
///
/// Expected: true for a stored course, false for an unknown id
#[tokio::test]
async fn reports_whether_course_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, courses) = factory::helpers::create_author_with_courses(db, 1).await?;

    let repo = CourseRepository::new(db);

    assert!(repo.exists(courses[0].id).await?);
    assert!(!repo.exists(Uuid::new_v4()).await?);

    Ok(())
}
