//! Course data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::course::{Course, CreateCourseParam, UpdateCourseParam};

/// Repository providing database operations for courses.
///
/// Lookups are scoped to the owning author, so a course id only matches when the
/// course belongs to the given author. `exists` is the one exception.
pub struct CourseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all courses of an author ordered by title.
    pub async fn get_by_author(&self, author_id: Uuid) -> Result<Vec<Course>, DbErr> {
        let entities = entity::prelude::Course::find()
            .filter(entity::course::Column::AuthorId.eq(author_id))
            .order_by_asc(entity::course::Column::Title)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Course::from_entity).collect())
    }

    /// Finds a course of an author.
    ///
    /// # Returns
    /// - `Ok(Some(Course))` - Course found and owned by the author
    /// - `Ok(None)` - No such course for this author
    /// - `Err(DbErr)` - Database error during query
    pub async fn get(&self, author_id: Uuid, course_id: Uuid) -> Result<Option<Course>, DbErr> {
        let entity = entity::prelude::Course::find()
            .filter(entity::course::Column::AuthorId.eq(author_id))
            .filter(entity::course::Column::Id.eq(course_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Course::from_entity))
    }

    /// Checks whether a course with the given id exists under any author.
    pub async fn exists(&self, course_id: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::Course::find()
            .filter(entity::course::Column::Id.eq(course_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a course for an author.
    ///
    /// The owning author is always `author_id`; the payload cannot move a course to
    /// another author.
    ///
    /// # Arguments
    /// - `author_id` - Owning author
    /// - `id` - Id of the new course
    /// - `param` - Title and description
    ///
    /// # Returns
    /// - `Ok(Course)` - The created course
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        author_id: Uuid,
        id: Uuid,
        param: CreateCourseParam,
    ) -> Result<Course, DbErr> {
        let entity = entity::course::ActiveModel {
            id: ActiveValue::Set(id),
            author_id: ActiveValue::Set(author_id),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
        }
        .insert(self.db)
        .await?;

        Ok(Course::from_entity(entity))
    }

    /// Overwrites the title and description of an existing course.
    ///
    /// The row is matched on the course id; callers check ownership with `get` first.
    ///
    /// # Returns
    /// - `Ok(Course)` - The updated course
    /// - `Err(DbErr::RecordNotUpdated)` - No such course
    /// - `Err(DbErr)` - Other database error during update
    pub async fn update(
        &self,
        author_id: Uuid,
        course_id: Uuid,
        param: UpdateCourseParam,
    ) -> Result<Course, DbErr> {
        let entity = entity::course::ActiveModel {
            id: ActiveValue::Unchanged(course_id),
            author_id: ActiveValue::Unchanged(author_id),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
        }
        .update(self.db)
        .await?;

        Ok(Course::from_entity(entity))
    }

    /// Deletes a course of an author.
    ///
    /// # Returns
    /// - `Ok(true)` - Course deleted
    /// - `Ok(false)` - No such course for this author
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, author_id: Uuid, course_id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Course::delete_many()
            .filter(entity::course::Column::AuthorId.eq(author_id))
            .filter(entity::course::Column::Id.eq(course_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
