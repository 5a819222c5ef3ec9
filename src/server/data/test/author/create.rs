use super::*;

/// Tests creating an author without courses.
///
/// Verifies that the repository assigns a fresh id and stores every field.
///
/// Expected: Ok with author created
#[tokio::test]
async fn creates_author_without_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthorRepository::new(db);
    let author = repo.create(create_param(vec![])).await?;

    assert_ne!(author.id, Uuid::nil());
    assert_eq!(author.first_name, "Jaimy");
    assert_eq!(author.last_name, "Johnson");
    assert_eq!(author.main_category, "Maps");

    let stored = entity::prelude::Author::find_by_id(author.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.date_of_birth, fixture::author::default_date_of_birth());

    let courses = entity::prelude::Course::find().all(db).await?;
    assert!(courses.is_empty());

    Ok(())
}

/// Tests creating an author together with initial courses.
///
/// Verifies that each nested course is inserted with its own id and the new
/// author as owner.
///
/// Expected: Ok with author and two courses created
#[tokio::test]
async fn creates_author_with_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthorRepository::new(db);
    let author = repo
        .create(create_param(vec![
            CreateCourseParam {
                title: "Reading the Stars".to_string(),
                description: None,
            },
            CreateCourseParam {
                title: "Charting Reefs".to_string(),
                description: Some("Shallow waters".to_string()),
            },
        ]))
        .await?;

    let courses = entity::prelude::Course::find().all(db).await?;
    assert_eq!(courses.len(), 2);
    assert!(courses.iter().all(|c| c.author_id == author.id));
    assert_ne!(courses[0].id, courses[1].id);

    Ok(())
}
