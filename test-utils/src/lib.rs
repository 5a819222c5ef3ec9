//! Course Library Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the course
//! library API. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, factories that insert authors and courses, and fixtures that build entity
//! models without touching the database.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_author_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_course_library_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     let author = factory::create_author(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
