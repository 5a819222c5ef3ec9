use super::*;

/// Tests deleting an author with courses.
///
/// Verifies that the author and all of its courses are removed while other
/// authors' courses remain.
///
/// Expected: Ok(true) with author and courses deleted
#[tokio::test]
async fn deletes_author_and_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _) = factory::helpers::create_author_with_courses(db, 3).await?;
    let (other, _) = factory::helpers::create_author_with_courses(db, 1).await?;

    let repo = AuthorRepository::new(db);
    let deleted = repo.delete(author.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Author::find_by_id(author.id)
        .one(db)
        .await?
        .is_none());

    let courses = entity::prelude::Course::find().all(db).await?;
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].author_id, other.id);

    Ok(())
}

/// Tests deleting an author that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_author(db).await?;

    let repo = AuthorRepository::new(db);
    let deleted = repo.delete(Uuid::new_v4()).await?;

    assert!(!deleted);
    assert_eq!(entity::prelude::Author::find().all(db).await?.len(), 1);

    Ok(())
}
