use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ValidationProblemDto;

const PROBLEM_TYPE: &str = "https://tools.ietf.org/html/rfc4918#section-11.2";
const PROBLEM_TITLE: &str = "One or more validation errors occurred.";

/// Field-level validation failures for a request payload.
///
/// Errors are keyed by the camelCase name of the offending field as it appears in the
/// request body. Nested values use a dotted, indexed key such as `courses[0].title`.
#[derive(Error, Debug, Default, Clone, PartialEq)]
#[error("{} validation error(s): {:?}", .errors.len(), .errors)]
pub struct ValidationError {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validation error holding a single message.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut error = Self::new();
        error.add(field, message);
        error
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Moves every error of `other` into `self`, prefixing its keys with `prefix`.
    pub fn merge_prefixed(&mut self, prefix: &str, other: ValidationError) {
        for (field, messages) in other.errors {
            self.errors
                .entry(format!("{}{}", prefix, field))
                .or_default()
                .extend(messages);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }

    /// Returns `Ok(value)` when no errors were recorded, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Converts validation errors into a 422 validation-problem response.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationProblemDto {
                problem_type: PROBLEM_TYPE.to_string(),
                title: PROBLEM_TITLE.to_string(),
                status: StatusCode::UNPROCESSABLE_ENTITY.as_u16(),
                errors: self.errors,
            }),
        )
            .into_response()
    }
}
