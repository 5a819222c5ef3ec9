//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert into the database and handle the
//! author/course foreign key relationship.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let author = factory::create_author(db).await?;
//!     let course = factory::create_course(db, author.id).await?;
//!
//!     // Create an author with three courses
//!     let (author, courses) = factory::helpers::create_author_with_courses(db, 3).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let author = factory::author::AuthorFactory::new(db)
//!     .first_name("Berry")
//!     .last_name("Griffin Beak Eldritch")
//!     .main_category("Ships")
//!     .build()
//!     .await?;
//! ```

pub mod author;
pub mod course;
pub mod helpers;

pub use author::create_author;
pub use course::create_course;
