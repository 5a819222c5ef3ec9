//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Existence checks and id checks before touching the database
//! - **Orchestration**: Coordinating author and course repositories
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Storing multi-row changes atomically

pub mod author;
pub mod course;
