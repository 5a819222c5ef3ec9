use super::*;

async fn seed_authors(db: &sea_orm::DatabaseConnection) -> Result<(), DbErr> {
    for (first_name, last_name, main_category) in [
        ("Nancy", "Rye", "Rum"),
        ("Berry", "Griffin Beak Eldritch", "Ships"),
        ("Eli", "Ivory Bones Sweet", "Singing"),
        ("Arnold", "Ship Wright", "Rum"),
        ("Seabury", "Hornblower", "Maps"),
    ] {
        factory::author::AuthorFactory::new(db)
            .first_name(first_name)
            .last_name(last_name)
            .main_category(main_category)
            .build()
            .await?;
    }

    Ok(())
}

/// Tests the first page with default parameters.
///
/// Verifies that authors are ordered by first name and the total counts every
/// author.
///
/// Expected: Ok with all five authors in name order
#[tokio::test]
async fn gets_first_page_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_authors(db).await?;

    let repo = AuthorRepository::new(db);
    let (authors, total) = repo.get_paged(&AuthorsResourceParam::default()).await?;

    assert_eq!(total, 5);
    let names: Vec<&str> = authors.iter().map(|a| a.first_name.as_str()).collect();
    assert_eq!(names, vec!["Arnold", "Berry", "Eli", "Nancy", "Seabury"]);

    Ok(())
}

/// Tests paging through the authors.
///
/// Verifies that the requested page contains only its slice while the total
/// still counts every matching author.
///
/// Expected: Ok with the second page of size two
#[tokio::test]
async fn gets_requested_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_authors(db).await?;

    let repo = AuthorRepository::new(db);
    let param = AuthorsResourceParam::new(None, None, Some(2), Some(2), None);
    let (authors, total) = repo.get_paged(&param).await?;

    assert_eq!(total, 5);
    let names: Vec<&str> = authors.iter().map(|a| a.first_name.as_str()).collect();
    assert_eq!(names, vec!["Eli", "Nancy"]);

    Ok(())
}

/// Tests paging past the last page.
///
/// Expected: Ok with no authors and the full total
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_authors(db).await?;

    let repo = AuthorRepository::new(db);
    let param = AuthorsResourceParam::new(None, None, Some(4), Some(2), None);
    let (authors, total) = repo.get_paged(&param).await?;

    assert!(authors.is_empty());
    assert_eq!(total, 5);

    Ok(())
}

/// Tests filtering on an exact main category.
///
/// Expected: Ok with only the two "Rum" authors
#[tokio::test]
async fn filters_by_main_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_authors(db).await?;

    let repo = AuthorRepository::new(db);
    let param = AuthorsResourceParam::new(Some("Rum".to_string()), None, None, None, None);
    let (authors, total) = repo.get_paged(&param).await?;

    assert_eq!(total, 2);
    assert!(authors.iter().all(|a| a.main_category == "Rum"));

    Ok(())
}

/// Tests searching across main category, first name and last name.
///
/// Verifies that "Ship" matches the "Ships" category and the "Ship Wright" last
/// name.
///
/// Expected: Ok with Arnold and Berry
#[tokio::test]
async fn searches_names_and_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_authors(db).await?;

    let repo = AuthorRepository::new(db);
    let param = AuthorsResourceParam::new(None, Some("Ship".to_string()), None, None, None);
    let (authors, total) = repo.get_paged(&param).await?;

    assert_eq!(total, 2);
    let names: Vec<&str> = authors.iter().map(|a| a.first_name.as_str()).collect();
    assert_eq!(names, vec!["Arnold", "Berry"]);

    Ok(())
}

/// Tests that LIKE wildcards in the search query match only themselves.
///
/// Expected: Ok with no authors for "%" and "_"
#[tokio::test]
async fn search_treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_authors(db).await?;

    let repo = AuthorRepository::new(db);
    for search in ["%", "_"] {
        let param = AuthorsResourceParam::new(None, Some(search.to_string()), None, None, None);
        let (authors, total) = repo.get_paged(&param).await?;

        assert_eq!(total, 0, "search {search:?}");
        assert!(authors.is_empty());
    }

    Ok(())
}

/// Tests searching for text that contains a percent sign.
///
/// Expected: Ok with only the author whose last name holds "0%"
#[tokio::test]
async fn search_finds_literal_percent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_authors(db).await?;
    factory::author::AuthorFactory::new(db)
        .first_name("Jack")
        .last_name("100% Rum")
        .main_category("Rum")
        .build()
        .await?;

    let repo = AuthorRepository::new(db);
    let param = AuthorsResourceParam::new(None, Some("0%".to_string()), None, None, None);
    let (authors, total) = repo.get_paged(&param).await?;

    assert_eq!(total, 1);
    assert_eq!(authors[0].first_name, "Jack");

    Ok(())
}

/// Tests combining the category filter with a search query.
///
/// Expected: Ok with only Nancy
#[tokio::test]
async fn combines_filter_and_search() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_authors(db).await?;

    let repo = AuthorRepository::new(db);
    let param = AuthorsResourceParam::new(
        Some("Rum".to_string()),
        Some("Nan".to_string()),
        None,
        None,
        None,
    );
    let (authors, total) = repo.get_paged(&param).await?;

    assert_eq!(total, 1);
    assert_eq!(authors[0].first_name, "Nancy");

    Ok(())
}

/// Tests an ordering other than name.
///
/// Expected: Ok with every author, order unspecified
#[tokio::test]
async fn returns_all_authors_for_unknown_ordering() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_authors(db).await?;

    let repo = AuthorRepository::new(db);
    let param = AuthorsResourceParam::new(None, None, None, None, Some("age".to_string()));
    let (authors, total) = repo.get_paged(&param).await?;

    assert_eq!(total, 5);
    assert_eq!(authors.len(), 5);

    Ok(())
}

/// Tests a page number far past any real page.
///
/// Verifies that the largest page number a client can send is capped instead of
/// overflowing the row offset.
///
/// Expected: Ok with no authors and the full total
#[tokio::test]
async fn returns_empty_page_for_huge_page_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_authors(db).await?;

    let repo = AuthorRepository::new(db);
    let param = AuthorsResourceParam::new(None, None, Some(u64::MAX), Some(20), None);
    let (authors, total) = repo.get_paged(&param).await?;

    assert!(authors.is_empty());
    assert_eq!(total, 5);

    Ok(())
}
