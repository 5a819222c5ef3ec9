//! Course domain models and parameters.
//!
//! Provides the course domain model, the validated parameters for creating and replacing
//! courses, and the JSON Patch application used for partial updates.

use json_patch::Patch;
use uuid::Uuid;

use crate::{
    model::course::{CourseDto, CreateCourseDto, UpdateCourseDto},
    server::{
        error::validation::ValidationError,
        util::validate::{max_length, required},
    },
};

const TITLE_MAX_LENGTH: usize = 100;
const DESCRIPTION_MAX_LENGTH: usize = 1500;

/// Key under which problems with a JSON Patch document are reported.
pub const PATCH_DOCUMENT_KEY: &str = "patchDocument";

/// Course belonging to exactly one author.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub description: Option<String>,
}

impl Course {
    /// Converts an entity model to a course domain model at the repository boundary.
    pub fn from_entity(entity: entity::course::Model) -> Self {
        Self {
            id: entity.id,
            author_id: entity.author_id,
            title: entity.title,
            description: entity.description,
        }
    }

    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.id,
            title: self.title,
            description: self.description,
            author_id: self.author_id,
        }
    }

    /// The patchable view of the course: title and description.
    pub fn into_update_dto(self) -> UpdateCourseDto {
        UpdateCourseDto {
            title: self.title,
            description: self.description,
        }
    }
}

/// Parameters for inserting a course. The owning author is passed separately.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCourseParam {
    pub title: String,
    pub description: Option<String>,
}

impl CreateCourseParam {
    /// Validates a creation DTO and converts it into parameters.
    ///
    /// On top of the field rules, the title must differ from the description.
    ///
    /// # Returns
    /// - `Ok(CreateCourseParam)` - Payload is valid
    /// - `Err(ValidationError)` - One or more rules failed
    pub fn from_dto(dto: CreateCourseDto) -> Result<Self, ValidationError> {
        let mut errors = validate_fields(&dto.title, dto.description.as_deref());

        if dto.description.as_deref() == Some(dto.title.as_str()) {
            errors.add(
                "TitleAndDescription",
                "the provided description should be different from title",
            );
        }

        errors.into_result(Self {
            title: dto.title,
            description: dto.description,
        })
    }
}

/// Parameters for replacing a course's title and description.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCourseParam {
    pub title: String,
    pub description: Option<String>,
}

impl UpdateCourseParam {
    /// Validates an update DTO and converts it into parameters.
    pub fn from_dto(dto: UpdateCourseDto) -> Result<Self, ValidationError> {
        validate_fields(&dto.title, dto.description.as_deref()).into_result(Self {
            title: dto.title,
            description: dto.description,
        })
    }
}

impl From<UpdateCourseParam> for CreateCourseParam {
    fn from(param: UpdateCourseParam) -> Self {
        Self {
            title: param.title,
            description: param.description,
        }
    }
}

/// Result of replacing a course that may not exist yet.
#[derive(Debug, Clone, PartialEq)]
pub enum UpsertOutcome {
    /// No course existed under the id, so it was created.
    Created(Course),
    /// The existing course was overwritten.
    Updated(Course),
}

/// Applies a JSON Patch document to the patchable view of a course.
///
/// Operations that cannot be applied, targets outside `title`/`description`, and results
/// that no longer deserialize are reported under `PATCH_DOCUMENT_KEY`. The result still
/// has to pass `UpdateCourseParam::from_dto`.
///
/// # Arguments
/// - `dto` - Current title and description of the course
/// - `patch` - Operations to apply in order
///
/// # Returns
/// - `Ok(UpdateCourseDto)` - The patched view
/// - `Err(ValidationError)` - The document could not be applied
pub fn apply_patch(dto: UpdateCourseDto, patch: &Patch) -> Result<UpdateCourseDto, ValidationError> {
    let mut document = serde_json::to_value(dto)
        .map_err(|e| ValidationError::single(PATCH_DOCUMENT_KEY, e.to_string()))?;

    json_patch::patch(&mut document, &patch.0)
        .map_err(|e| ValidationError::single(PATCH_DOCUMENT_KEY, e.to_string()))?;

    if let Some(fields) = document.as_object() {
        let mut errors = ValidationError::new();
        for key in fields.keys().filter(|k| !matches!(k.as_str(), "title" | "description")) {
            errors.add(
                PATCH_DOCUMENT_KEY,
                format!("The target location '/{}' was not found.", key),
            );
        }
        if !errors.is_empty() {
            return Err(errors);
        }
    }

    serde_json::from_value(document)
        .map_err(|e| ValidationError::single(PATCH_DOCUMENT_KEY, e.to_string()))
}

fn validate_fields(title: &str, description: Option<&str>) -> ValidationError {
    let mut errors = ValidationError::new();

    required(&mut errors, "title", title);
    max_length(&mut errors, "title", title, TITLE_MAX_LENGTH);
    if let Some(description) = description {
        max_length(&mut errors, "description", description, DESCRIPTION_MAX_LENGTH);
    }

    errors
}
