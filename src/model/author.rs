use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::course::CreateCourseDto;

/// An author with id, full name, age and main category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub id: Uuid,
    /// First and last name separated by a space.
    pub name: String,
    /// Age in whole years.
    pub age: i32,
    pub main_category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthorDto {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub date_of_birth: DateTime<FixedOffset>,
    #[serde(default)]
    pub main_category: String,
    /// Courses created together with the author.
    #[serde(default)]
    pub courses: Vec<CreateCourseDto>,
}
