//! Author domain models and parameters.
//!
//! Provides the author domain model, the parameters for creating authors (optionally
//! with their first courses), and the normalized parameters of the author listing.

use chrono::{DateTime, Datelike, FixedOffset, Utc};
use uuid::Uuid;

use crate::{
    model::author::{AuthorDto, CreateAuthorDto},
    server::{
        error::validation::ValidationError,
        model::course::CreateCourseParam,
        util::validate::{max_length, required},
    },
};

/// Largest page size a client may request.
pub const MAX_PAGE_SIZE: u64 = 20;
/// Page size used when the client does not send one.
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Ordering used when the client does not send one.
pub const DEFAULT_ORDER_BY: &str = "name";
/// Largest page number kept; the row offset of any page stays within `i64`.
pub const MAX_PAGE_NUMBER: u64 = i64::MAX as u64 / MAX_PAGE_SIZE;

const NAME_MAX_LENGTH: usize = 50;
const MAIN_CATEGORY_MAX_LENGTH: usize = 50;

/// Author who owns zero or more courses.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: DateTime<FixedOffset>,
    pub main_category: String,
}

impl Author {
    /// Converts an entity model to an author domain model at the repository boundary.
    pub fn from_entity(entity: entity::author::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            date_of_birth: entity.date_of_birth,
            main_category: entity.main_category,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Converts the author to a DTO for API responses.
    ///
    /// # Arguments
    /// - `now` - Instant the author's age is computed at
    pub fn into_dto(self, now: DateTime<Utc>) -> AuthorDto {
        AuthorDto {
            id: self.id,
            name: self.full_name(),
            age: current_age(self.date_of_birth, now),
            main_category: self.main_category,
        }
    }
}

/// Whole years elapsed between `date_of_birth` and `now`.
///
/// The birthday is compared in the offset the date of birth was recorded in, and the
/// age only increases once the birthday of the current year has been reached.
pub fn current_age(date_of_birth: DateTime<FixedOffset>, now: DateTime<Utc>) -> i32 {
    let born = date_of_birth.date_naive();
    let today = now.with_timezone(date_of_birth.offset()).date_naive();

    let mut age = today.year() - born.year();
    if (today.month(), today.day()) < (born.month(), born.day()) {
        age -= 1;
    }

    age
}

/// Parameters for creating an author together with its initial courses.
#[derive(Debug, Clone)]
pub struct CreateAuthorParam {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: DateTime<FixedOffset>,
    pub main_category: String,
    pub courses: Vec<CreateCourseParam>,
}

impl CreateAuthorParam {
    /// Validates a creation DTO and converts it into parameters.
    ///
    /// Nested course errors are reported under `courses[i].<field>`.
    ///
    /// # Returns
    /// - `Ok(CreateAuthorParam)` - Payload is valid
    /// - `Err(ValidationError)` - One or more fields failed validation
    pub fn from_dto(dto: CreateAuthorDto) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::new();

        required(&mut errors, "firstName", &dto.first_name);
        max_length(&mut errors, "firstName", &dto.first_name, NAME_MAX_LENGTH);
        required(&mut errors, "lastName", &dto.last_name);
        max_length(&mut errors, "lastName", &dto.last_name, NAME_MAX_LENGTH);
        required(&mut errors, "mainCategory", &dto.main_category);
        max_length(
            &mut errors,
            "mainCategory",
            &dto.main_category,
            MAIN_CATEGORY_MAX_LENGTH,
        );

        let mut courses = Vec::with_capacity(dto.courses.len());
        for (index, course) in dto.courses.into_iter().enumerate() {
            match CreateCourseParam::from_dto(course) {
                Ok(param) => courses.push(param),
                Err(course_errors) => {
                    errors.merge_prefixed(&format!("courses[{}].", index), course_errors)
                }
            }
        }

        errors.into_result(Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            date_of_birth: dto.date_of_birth,
            main_category: dto.main_category,
            courses,
        })
    }
}

/// Normalized parameters of the author listing.
///
/// Built from the raw query string: filters are trimmed and dropped when blank, the
/// page number lies within `1..=MAX_PAGE_NUMBER` and the page size within
/// `1..=MAX_PAGE_SIZE`.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorsResourceParam {
    /// Exact main category to filter on.
    pub main_category: Option<String>,
    /// Text searched for in the main category, first name and last name.
    pub search_query: Option<String>,
    /// One-based page number.
    pub page_number: u64,
    pub page_size: u64,
    /// Requested ordering; only `name` (any case) applies an ordering.
    pub order_by: String,
}

impl AuthorsResourceParam {
    pub fn new(
        main_category: Option<String>,
        search_query: Option<String>,
        page_number: Option<u64>,
        page_size: Option<u64>,
        order_by: Option<String>,
    ) -> Self {
        Self {
            main_category: non_blank(main_category),
            search_query: non_blank(search_query),
            page_number: page_number.unwrap_or(1).clamp(1, MAX_PAGE_NUMBER),
            page_size: page_size
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
            order_by: order_by
                .map(|value| value.trim().to_string())
                .unwrap_or_else(|| DEFAULT_ORDER_BY.to_string()),
        }
    }

    /// Whether results are ordered by first name then last name.
    pub fn orders_by_name(&self) -> bool {
        self.order_by.eq_ignore_ascii_case("name")
    }
}

impl Default for AuthorsResourceParam {
    fn default() -> Self {
        Self::new(None, None, None, None, None)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
