//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for unit
//! tests of model conversions and as the defaults factories start from.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let author = fixture::author::entity();
//!
//! let course = fixture::course::entity_builder()
//!     .title("Avoiding Brawling Pirates")
//!     .build();
//! ```

pub mod author;
pub mod course;
