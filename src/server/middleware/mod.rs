//! Request middleware wrapped around the API routes.

pub mod cors;
