//! Author data repository for database operations.
//!
//! Provides the `AuthorRepository` for creating, querying and deleting authors,
//! including the filtered, ordered and paged author listing.

use sea_orm::{
    sea_query::LikeExpr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::{
    data::course::CourseRepository,
    model::author::{Author, AuthorsResourceParam, CreateAuthorParam},
};

/// Escape character for `LIKE` patterns built from client text.
const LIKE_ESCAPE: char = '!';

/// Builds a `LIKE` pattern matching any value that contains `text` literally.
///
/// `%` and `_` in the text lose their wildcard meaning.
fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');

    pattern
}

fn contains_literal(text: &str) -> LikeExpr {
    LikeExpr::new(contains_pattern(text)).escape(LIKE_ESCAPE)
}

/// Repository providing database operations for authors.
pub struct AuthorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuthorRepository<'a, C> {
    /// Creates a new AuthorRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an author with a fresh id along with its initial courses.
    ///
    /// Run inside a transaction so the author and its courses are stored together.
    ///
    /// # Arguments
    /// - `param` - Author fields and the courses to create for it
    ///
    /// # Returns
    /// - `Ok(Author)` - The created author
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateAuthorParam) -> Result<Author, DbErr> {
        let entity = entity::author::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            date_of_birth: ActiveValue::Set(param.date_of_birth),
            main_category: ActiveValue::Set(param.main_category),
        }
        .insert(self.db)
        .await?;

        let course_repo = CourseRepository::new(self.db);
        for course in param.courses {
            course_repo
                .create(entity.id, Uuid::new_v4(), course)
                .await?;
        }

        Ok(Author::from_entity(entity))
    }

    /// Finds an author by id.
    ///
    /// # Returns
    /// - `Ok(Some(Author))` - Author found
    /// - `Ok(None)` - No author with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Author>, DbErr> {
        let entity = entity::prelude::Author::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Author::from_entity))
    }

    /// Checks whether an author with the given id exists.
    pub async fn exists(&self, id: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::Author::find()
            .filter(entity::author::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets one page of authors matching the listing parameters.
    ///
    /// The query is composed from the parameters:
    /// - `main_category` filters on an exact main category
    /// - `search_query` keeps authors whose main category, first name or last name
    ///   contains the text literally
    /// - ordering by `name` sorts by first name then last name; any other ordering
    ///   leaves the rows unordered
    ///
    /// # Arguments
    /// - `param` - Normalized listing parameters (one-based page number)
    ///
    /// # Returns
    /// - `Ok((authors, total))` - Authors on the requested page and the number of
    ///   matching authors across all pages
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paged(&self, param: &AuthorsResourceParam) -> Result<(Vec<Author>, u64), DbErr> {
        let mut query = entity::prelude::Author::find();

        if let Some(main_category) = param.main_category.as_deref() {
            query = query.filter(entity::author::Column::MainCategory.eq(main_category));
        }

        if let Some(search_query) = param.search_query.as_deref() {
            let pattern = contains_literal(search_query);
            query = query.filter(
                Condition::any()
                    .add(entity::author::Column::MainCategory.like(pattern.clone()))
                    .add(entity::author::Column::FirstName.like(pattern.clone()))
                    .add(entity::author::Column::LastName.like(pattern)),
            );
        }

        if param.orders_by_name() {
            query = query
                .order_by_asc(entity::author::Column::FirstName)
                .order_by_asc(entity::author::Column::LastName);
        }

        let paginator = query.paginate(self.db, param.page_size);

        let total = paginator.num_items().await?;
        let entities = paginator
            .fetch_page(param.page_number.saturating_sub(1))
            .await?;
        let authors = entities.into_iter().map(Author::from_entity).collect();

        Ok((authors, total))
    }

    /// Gets the authors with the given ids, ordered by first name then last name.
    ///
    /// Unknown ids are skipped, so the result may be shorter than `ids`.
    pub async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Author>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Author::find()
            .filter(entity::author::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::author::Column::FirstName)
            .order_by_asc(entity::author::Column::LastName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Author::from_entity).collect())
    }

    /// Deletes an author and all of its courses.
    ///
    /// Run inside a transaction so the courses are not removed without the author.
    ///
    /// # Returns
    /// - `Ok(true)` - Author deleted
    /// - `Ok(false)` - No author with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        entity::prelude::Course::delete_many()
            .filter(entity::course::Column::AuthorId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Author::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
