use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Paging metadata serialized into the `X-Pagination` response header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetadataDto {
    pub total_count: u64,
    pub page_size: u64,
    pub current_page: u64,
    pub total_pages: u64,
    pub previous_page_link: Option<String>,
    pub next_page_link: Option<String>,
}
