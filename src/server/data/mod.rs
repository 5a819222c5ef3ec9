//! Database repository layer for authors and courses.
//!
//! Repositories handle the database operations (CRUD) for each domain. They use SeaORM
//! entity models internally and return domain models to keep the data layer separate
//! from the business logic layer. Repositories borrow any SeaORM connection, so the
//! same code runs against the pool or inside a transaction.

pub mod author;
pub mod course;

#[cfg(test)]
mod test;
