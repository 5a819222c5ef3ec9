//! Data transfer objects accepted and returned at the API boundary.

pub mod api;
pub mod author;
pub mod course;
pub mod pagination;
