use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Body of a 422 response listing field-level validation errors.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidationProblemDto {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    pub errors: BTreeMap<String, Vec<String>>,
}
