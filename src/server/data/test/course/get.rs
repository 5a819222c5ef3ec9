use super::*;

/// Tests getting a course of its owning author.
///
/// Expected: Ok(Some(Course))
#[tokio::test]
async fn gets_course_of_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, courses) = factory::helpers::create_author_with_courses(db, 2).await?;

    let repo = CourseRepository::new(db);
    let result = repo.get(author.id, courses[1].id).await?;

    let course = result.unwrap();
    assert_eq!(course.id, courses[1].id);
    assert_eq!(course.title, courses[1].title);
    assert_eq!(course.description, courses[1].description);

    Ok(())
}

/// Tests getting a course through an author that does not own it.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_other_authors_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, courses) = factory::helpers::create_author_with_courses(db, 1).await?;
    let other = factory::create_author(db).await?;

    let repo = CourseRepository::new(db);

    assert!(repo.get(other.id, courses[0].id).await?.is_none());
    assert!(repo.get(other.id, Uuid::new_v4()).await?.is_none());

    Ok(())
}
