//! Shared helper utilities for factory methods.

use sea_orm::{ConnectionTrait, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an author with `course_count` default courses.
///
/// # Arguments
/// - `db` - Database connection
/// - `course_count` - Number of courses to create for the author
///
/// # Returns
/// - `Ok((author, courses))` - The author and its courses in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_author_with_courses<C: ConnectionTrait>(
    db: &C,
    course_count: usize,
) -> Result<(entity::author::Model, Vec<entity::course::Model>), DbErr> {
    let author = crate::factory::author::create_author(db).await?;

    let mut courses = Vec::with_capacity(course_count);
    for _ in 0..course_count {
        courses.push(crate::factory::course::create_course(db, author.id).await?);
    }

    Ok((author, courses))
}
