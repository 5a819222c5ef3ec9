use uuid::Uuid;

use crate::server::error::AppError;

/// Parses a comma separated list of ids, optionally wrapped in parentheses.
///
/// Accepts the `(id1,id2,...)` form used by the author collection endpoint. Blank
/// entries are skipped.
///
/// # Arguments
/// - `value` - Raw path segment such as `(3f2a...,9b1c...)`
///
/// # Returns
/// - `Ok(Vec<Uuid>)` - Parsed ids in the order given
/// - `Err(AppError::BadRequest)` - The list is empty or an entry is not a valid UUID
pub fn parse_id_list(value: &str) -> Result<Vec<Uuid>, AppError> {
    let trimmed = value.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(trimmed);

    let ids = inner
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            Uuid::parse_str(entry)
                .map_err(|_| AppError::BadRequest(format!("'{}' is not a valid id", entry)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if ids.is_empty() {
        return Err(AppError::BadRequest("No ids were provided".to_string()));
    }

    Ok(ids)
}

/// Rejects the nil UUID, which never identifies a stored resource.
///
/// # Arguments
/// - `id` - Id taken from the request
/// - `name` - Parameter name used in the error message
///
/// # Returns
/// - `Ok(())` - Id is not nil
/// - `Err(AppError::BadRequest)` - Id is the nil UUID
pub fn ensure_id(id: Uuid, name: &str) -> Result<(), AppError> {
    if id.is_nil() {
        return Err(AppError::BadRequest(format!("{} must not be empty", name)));
    }

    Ok(())
}
