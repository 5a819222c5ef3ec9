//! SeaORM entities for the course library schema.

pub mod prelude;

pub mod author;
pub mod course;
