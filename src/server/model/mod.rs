//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! authors and courses along with operation parameters. Domain models are converted from
//! entity models at the repository boundary and transformed to DTOs at the controller
//! boundary. Conversions from request DTOs validate the payload on the way in.

pub mod author;
pub mod course;
pub mod pagination;
