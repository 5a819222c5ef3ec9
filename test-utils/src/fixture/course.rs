//! Course fixtures for creating in-memory test data.

use entity::course;
use uuid::Uuid;

/// Default test course title.
pub const DEFAULT_TITLE: &str = "Commandeering a Ship Without Getting Caught";

/// Default test course description.
pub const DEFAULT_DESCRIPTION: &str =
    "Commandeering a ship in rough waters isn't easy. Learn how to do it without getting caught.";

/// Creates a course entity model with default values.
///
/// # Default Values
/// - id: nil UUID
/// - author_id: nil UUID
/// - title: `DEFAULT_TITLE`
/// - description: `Some(DEFAULT_DESCRIPTION)`
pub fn entity() -> course::Model {
    CourseEntityBuilder::default().build()
}

/// Creates a course entity builder for customization.
pub fn entity_builder() -> CourseEntityBuilder {
    CourseEntityBuilder::default()
}

/// Builder for creating customized course entity models.
pub struct CourseEntityBuilder {
    id: Uuid,
    author_id: Uuid,
    title: String,
    description: Option<String>,
}

impl Default for CourseEntityBuilder {
    fn default() -> Self {
        Self {
            id: Uuid::nil(),
            author_id: Uuid::nil(),
            title: DEFAULT_TITLE.to_string(),
            description: Some(DEFAULT_DESCRIPTION.to_string()),
        }
    }
}

impl CourseEntityBuilder {
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn author_id(mut self, author_id: Uuid) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn build(self) -> course::Model {
        course::Model {
            id: self.id,
            author_id: self.author_id,
            title: self.title,
            description: self.description,
        }
    }
}
