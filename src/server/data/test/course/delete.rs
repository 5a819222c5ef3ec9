use super::*;

/// Tests deleting a course of its owning author.
///
/// Expected: Ok(true) with only that course removed
#[tokio::test]
async fn deletes_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, courses) = factory::helpers::create_author_with_courses(db, 2).await?;

    let repo = CourseRepository::new(db);
    let deleted = repo.delete(author.id, courses[0].id).await?;

    assert!(deleted);
    let remaining = entity::prelude::Course::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, courses[1].id);

    Ok(())
}

/// Tests deleting a course through an author that does not own it.
///
/// Expected: Ok(false) with the course kept
#[tokio::test]
async fn keeps_course_of_other_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, courses) = factory::helpers::create_author_with_courses(db, 1).await?;
    let other = factory::create_author(db).await?;

    let repo = CourseRepository::new(db);
    let deleted = repo.delete(other.id, courses[0].id).await?;

    assert!(!deleted);
    assert_eq!(entity::prelude::Course::find().all(db).await?.len(), 1);

    Ok(())
}
