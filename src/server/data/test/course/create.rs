use super::*;

/// Tests creating a course for an author.
///
/// Verifies that the course is stored under the given id and owning author.
///
/// Expected: Ok with course created
#[tokio::test]
async fn creates_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;
    let id = Uuid::new_v4();

    let repo = CourseRepository::new(db);
    let course = repo
        .create(
            author.id,
            id,
            CreateCourseParam {
                title: "Overthrowing Mutiny".to_string(),
                description: None,
            },
        )
        .await?;

    assert_eq!(course.id, id);
    assert_eq!(course.author_id, author.id);

    let stored = entity::prelude::Course::find_by_id(id).one(db).await?.unwrap();
    assert_eq!(stored.title, "Overthrowing Mutiny");
    assert!(stored.description.is_none());

    Ok(())
}

/// Tests creating a course whose id is already taken.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_duplicate_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, courses) = factory::helpers::create_author_with_courses(db, 1).await?;

    let repo = CourseRepository::new(db);
    let result = repo
        .create(
            author.id,
            courses[0].id,
            CreateCourseParam {
                title: "Duplicate".to_string(),
                description: None,
            },
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
