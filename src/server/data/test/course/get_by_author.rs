use super::*;

/// Tests getting the courses of an author.
///
/// Verifies that only the author's courses are returned, ordered by title.
///
/// Expected: Ok with the author's courses in title order
#[tokio::test]
async fn gets_courses_ordered_by_title() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;
    let other = factory::create_author(db).await?;
    for title in ["Splicing Rope", "Avoiding Scurvy", "Mending Sails"] {
        factory::course::CourseFactory::new(db, author.id)
            .title(title)
            .build()
            .await?;
    }
    factory::create_course(db, other.id).await?;

    let repo = CourseRepository::new(db);
    let courses = repo.get_by_author(author.id).await?;

    let titles: Vec<&str> = courses.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Avoiding Scurvy", "Mending Sails", "Splicing Rope"]);
    assert!(courses.iter().all(|c| c.author_id == author.id));

    Ok(())
}

/// Tests getting courses of an author without any.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_author_without_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;

    let repo = CourseRepository::new(db);
    let courses = repo.get_by_author(author.id).await?;

    assert!(courses.is_empty());

    Ok(())
}
