use super::*;

/// Tests overwriting the title and description of a course.
///
/// Expected: Ok with course updated
#[tokio::test]
async fn updates_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, courses) = factory::helpers::create_author_with_courses(db, 1).await?;

    let repo = CourseRepository::new(db);
    let course = repo
        .update(
            author.id,
            courses[0].id,
            UpdateCourseParam {
                title: "Updated".to_string(),
                description: None,
            },
        )
        .await?;

    assert_eq!(course.id, courses[0].id);
    assert_eq!(course.author_id, author.id);
    assert_eq!(course.title, "Updated");
    assert!(course.description.is_none());

    let stored = entity::prelude::Course::find_by_id(courses[0].id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.title, "Updated");
    assert!(stored.description.is_none());

    Ok(())
}

/// Tests updating a course that does not exist.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn fails_for_unknown_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;

    let repo = CourseRepository::new(db);
    let result = repo
        .update(
            author.id,
            Uuid::new_v4(),
            UpdateCourseParam {
                title: "Updated".to_string(),
                description: None,
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}
