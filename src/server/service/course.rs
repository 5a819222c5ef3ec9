//! Course business logic.
//!
//! Every operation first checks that the owning author exists, so a missing author
//! is reported separately from a missing course.

use json_patch::Patch;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{author::AuthorRepository, course::CourseRepository},
    error::AppError,
    model::course::{apply_patch, Course, CreateCourseParam, UpdateCourseParam, UpsertOutcome},
    util::parse::ensure_id,
};

const AUTHOR_NOT_FOUND: &str = "Author Not Found";
const COURSE_NOT_FOUND: &str = "Course Not Found";
const COURSE_ID_TAKEN: &str = "Course id is already used by another author";

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all courses of an author ordered by title.
    pub async fn get_for_author(&self, author_id: Uuid) -> Result<Vec<Course>, AppError> {
        self.ensure_author(author_id).await?;

        Ok(CourseRepository::new(self.db)
            .get_by_author(author_id)
            .await?)
    }

    /// Gets a course of an author.
    ///
    /// # Returns
    /// - `Ok(Course)` - Course found
    /// - `Err(AppError::NotFound)` - Author or course not found
    pub async fn get(&self, author_id: Uuid, course_id: Uuid) -> Result<Course, AppError> {
        self.ensure_author(author_id).await?;
        ensure_id(course_id, "courseId")?;

        self.find_course(author_id, course_id).await
    }

    /// Creates a course with a fresh id for an author.
    pub async fn create(
        &self,
        author_id: Uuid,
        param: CreateCourseParam,
    ) -> Result<Course, AppError> {
        self.ensure_author(author_id).await?;

        let course = CourseRepository::new(self.db)
            .create(author_id, Uuid::new_v4(), param)
            .await
            .map_err(AppError::SaveFailed)?;

        tracing::info!("Created course {} for author {}", course.id, author_id);

        Ok(course)
    }

    /// Replaces a course, creating it under `course_id` when it does not exist yet.
    ///
    /// # Returns
    /// - `Ok(UpsertOutcome)` - Whether the course was created or updated
    /// - `Err(AppError::NotFound)` - Author not found
    /// - `Err(AppError::Conflict)` - The course id belongs to another author
    pub async fn upsert(
        &self,
        author_id: Uuid,
        course_id: Uuid,
        param: UpdateCourseParam,
    ) -> Result<UpsertOutcome, AppError> {
        self.ensure_author(author_id).await?;
        ensure_id(course_id, "courseId")?;

        let repo = CourseRepository::new(self.db);

        if repo.get(author_id, course_id).await?.is_none() {
            if repo.exists(course_id).await? {
                return Err(AppError::Conflict(COURSE_ID_TAKEN.to_string()));
            }

            let course = repo
                .create(author_id, course_id, param.into())
                .await
                .map_err(AppError::SaveFailed)?;

            tracing::info!("Created course {} for author {} on update", course_id, author_id);

            return Ok(UpsertOutcome::Created(course));
        }

        let course = repo
            .update(author_id, course_id, param)
            .await
            .map_err(AppError::SaveFailed)?;

        Ok(UpsertOutcome::Updated(course))
    }

    /// Applies a JSON Patch document to a course and stores the result.
    ///
    /// # Returns
    /// - `Ok(Course)` - The updated course
    /// - `Err(AppError::NotFound)` - Author or course not found
    /// - `Err(AppError::ValidationErr)` - The document could not be applied or the
    ///   patched course is invalid
    pub async fn patch(
        &self,
        author_id: Uuid,
        course_id: Uuid,
        patch: &Patch,
    ) -> Result<Course, AppError> {
        self.ensure_author(author_id).await?;
        ensure_id(course_id, "courseId")?;

        let course = self.find_course(author_id, course_id).await?;

        let patched = apply_patch(course.into_update_dto(), patch)?;
        let param = UpdateCourseParam::from_dto(patched)?;

        let course = CourseRepository::new(self.db)
            .update(author_id, course_id, param)
            .await
            .map_err(AppError::SaveFailed)?;

        Ok(course)
    }

    /// Deletes a course of an author.
    pub async fn delete(&self, author_id: Uuid, course_id: Uuid) -> Result<(), AppError> {
        self.ensure_author(author_id).await?;
        ensure_id(course_id, "courseId")?;

        let deleted = CourseRepository::new(self.db)
            .delete(author_id, course_id)
            .await
            .map_err(AppError::SaveFailed)?;

        if !deleted {
            return Err(AppError::NotFound(COURSE_NOT_FOUND.to_string()));
        }

        tracing::info!("Deleted course {} of author {}", course_id, author_id);

        Ok(())
    }

    async fn ensure_author(&self, author_id: Uuid) -> Result<(), AppError> {
        ensure_id(author_id, "authorId")?;

        if !AuthorRepository::new(self.db).exists(author_id).await? {
            return Err(AppError::NotFound(AUTHOR_NOT_FOUND.to_string()));
        }

        Ok(())
    }

    async fn find_course(&self, author_id: Uuid, course_id: Uuid) -> Result<Course, AppError> {
        CourseRepository::new(self.db)
            .get(author_id, course_id)
            .await?
            .ok_or_else(|| AppError::NotFound(COURSE_NOT_FOUND.to_string()))
    }
}
