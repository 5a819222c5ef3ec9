//! HTTP handlers for the author, course and author collection endpoints.
//!
//! Handlers are thin: they convert DTOs into validated parameters, call the matching
//! service, and shape the HTTP response (status, `Location`, `X-Pagination`).

pub mod author;
pub mod author_collection;
pub mod course;

#[cfg(test)]
mod test;
