//! Course factory for creating test course entities.

use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};
use uuid::Uuid;

use crate::{factory::helpers::next_id, fixture};

/// Factory for creating test courses owned by an existing author.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::course::CourseFactory;
///
/// let course = CourseFactory::new(&db, author.id)
///     .title("Commandeering a Ship Without Getting Caught")
///     .description(None)
///     .build()
///     .await?;
/// ```
pub struct CourseFactory<'a, C: ConnectionTrait> {
    db: &'a C,
    id: Uuid,
    author_id: Uuid,
    title: String,
    description: Option<String>,
}

impl<'a, C: ConnectionTrait> CourseFactory<'a, C> {
    /// Creates a new CourseFactory with default values.
    ///
    /// Defaults:
    /// - id: random UUID
    /// - title: `"Course {n}"` where n is auto-incremented
    /// - description: `Some(fixture::course::DEFAULT_DESCRIPTION)`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `author_id` - ID of the author owning the course
    pub fn new(db: &'a C, author_id: Uuid) -> Self {
        Self {
            db,
            id: Uuid::new_v4(),
            author_id,
            title: format!("Course {}", next_id()),
            description: Some(fixture::course::DEFAULT_DESCRIPTION.to_string()),
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Builds and inserts the course entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::course::Model)` - Created course entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            id: ActiveValue::Set(self.id),
            author_id: ActiveValue::Set(self.author_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course with default values for the specified author.
///
/// Shorthand for `CourseFactory::new(db, author_id).build().await`.
pub async fn create_course<C: ConnectionTrait>(
    db: &C,
    author_id: Uuid,
) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db, author_id).build().await
}
