//! Paged query results.

use crate::model::pagination::PaginationMetadataDto;

/// One page of query results together with the counts needed for navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedList<T> {
    /// Items on the current page.
    pub items: Vec<T>,
    /// Number of items matching the query across all pages.
    pub total_count: u64,
    /// One-based number of the current page.
    pub current_page: u64,
    /// Maximum number of items per page.
    pub page_size: u64,
    /// Number of pages needed to hold `total_count` items.
    pub total_pages: u64,
}

impl<T> PagedList<T> {
    pub fn new(items: Vec<T>, total_count: u64, current_page: u64, page_size: u64) -> Self {
        let total_pages = if page_size > 0 {
            total_count.div_ceil(page_size)
        } else {
            0
        };

        Self {
            items,
            total_count,
            current_page,
            page_size,
            total_pages,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Converts the items while keeping the paging counts.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedList<U> {
        PagedList {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            current_page: self.current_page,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }

    /// Builds the `X-Pagination` header payload for this page.
    ///
    /// # Arguments
    /// - `previous_page_link` - Link to the previous page, if there is one
    /// - `next_page_link` - Link to the next page, if there is one
    pub fn metadata(
        &self,
        previous_page_link: Option<String>,
        next_page_link: Option<String>,
    ) -> PaginationMetadataDto {
        PaginationMetadataDto {
            total_count: self.total_count,
            page_size: self.page_size,
            current_page: self.current_page,
            total_pages: self.total_pages,
            previous_page_link,
            next_page_link,
        }
    }
}
