//! Author factory for creating test author entities.

use chrono::{DateTime, FixedOffset};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};
use uuid::Uuid;

use crate::{factory::helpers::next_id, fixture};

/// Factory for creating test authors with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::author::AuthorFactory;
///
/// let author = AuthorFactory::new(&db)
///     .first_name("Nancy")
///     .main_category("Rum")
///     .build()
///     .await?;
/// ```
pub struct AuthorFactory<'a, C: ConnectionTrait> {
    db: &'a C,
    id: Uuid,
    first_name: String,
    last_name: String,
    date_of_birth: DateTime<FixedOffset>,
    main_category: String,
}

impl<'a, C: ConnectionTrait> AuthorFactory<'a, C> {
    /// Creates a new AuthorFactory with default values.
    ///
    /// Defaults:
    /// - id: random UUID
    /// - first_name: `"Author {n}"` where n is auto-incremented
    /// - last_name: `"Test"`
    /// - date_of_birth: `fixture::author::default_date_of_birth()`
    /// - main_category: `"Pirates"`
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            id: Uuid::new_v4(),
            first_name: format!("Author {}", next_id()),
            last_name: fixture::author::DEFAULT_LAST_NAME.to_string(),
            date_of_birth: fixture::author::default_date_of_birth(),
            main_category: fixture::author::DEFAULT_MAIN_CATEGORY.to_string(),
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn date_of_birth(mut self, date_of_birth: DateTime<FixedOffset>) -> Self {
        self.date_of_birth = date_of_birth;
        self
    }

    pub fn main_category(mut self, main_category: impl Into<String>) -> Self {
        self.main_category = main_category.into();
        self
    }

    /// Builds and inserts the author entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::author::Model)` - Created author entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::author::Model, DbErr> {
        entity::author::ActiveModel {
            id: ActiveValue::Set(self.id),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            date_of_birth: ActiveValue::Set(self.date_of_birth),
            main_category: ActiveValue::Set(self.main_category),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an author with default values.
///
/// Shorthand for `AuthorFactory::new(db).build().await`.
pub async fn create_author<C: ConnectionTrait>(db: &C) -> Result<entity::author::Model, DbErr> {
    AuthorFactory::new(db).build().await
}
