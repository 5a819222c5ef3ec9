//! Field rules shared by the DTO-to-param conversions.

use crate::server::error::validation::ValidationError;

/// Records an error when `value` is empty or only whitespace.
pub fn required(errors: &mut ValidationError, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, format!("The {} field is required.", field));
    }
}

/// Records an error when `value` is longer than `max` characters.
pub fn max_length(errors: &mut ValidationError, field: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.add(
            field,
            format!(
                "The field {} must be a string with a maximum length of {}.",
                field, max
            ),
        );
    }
}
