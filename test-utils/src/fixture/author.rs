//! Author fixtures for creating in-memory test data.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use entity::author;
use uuid::Uuid;

/// Default test author first name.
pub const DEFAULT_FIRST_NAME: &str = "Berry";

/// Default test author last name.
pub const DEFAULT_LAST_NAME: &str = "Test";

/// Default test author main category.
pub const DEFAULT_MAIN_CATEGORY: &str = "Pirates";

/// Default date of birth, 1980-06-15 at midnight UTC.
pub fn default_date_of_birth() -> DateTime<FixedOffset> {
    Utc.with_ymd_and_hms(1980, 6, 15, 0, 0, 0)
        .single()
        .expect("default date of birth is a valid timestamp")
        .fixed_offset()
}

/// Creates an author entity model with default values.
///
/// # Default Values
/// - id: nil UUID
/// - first_name: `"Berry"`
/// - last_name: `"Test"`
/// - date_of_birth: 1980-06-15T00:00:00+00:00
/// - main_category: `"Pirates"`
pub fn entity() -> author::Model {
    AuthorEntityBuilder::default().build()
}

/// Creates an author entity builder for customization.
pub fn entity_builder() -> AuthorEntityBuilder {
    AuthorEntityBuilder::default()
}

/// Builder for creating customized author entity models.
pub struct AuthorEntityBuilder {
    id: Uuid,
    first_name: String,
    last_name: String,
    date_of_birth: DateTime<FixedOffset>,
    main_category: String,
}

impl Default for AuthorEntityBuilder {
    fn default() -> Self {
        Self {
            id: Uuid::nil(),
            first_name: DEFAULT_FIRST_NAME.to_string(),
            last_name: DEFAULT_LAST_NAME.to_string(),
            date_of_birth: default_date_of_birth(),
            main_category: DEFAULT_MAIN_CATEGORY.to_string(),
        }
    }
}

impl AuthorEntityBuilder {
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

    pub fn build(self) -> author::Model {
        author::Model {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            date_of_birth: self.date_of_birth,
            main_category: self.main_category,
        }
    }
}
