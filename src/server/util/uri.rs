//! Absolute URLs of API resources, used for `Location` headers and page links.

use url::Url;
use uuid::Uuid;

use crate::server::model::author::AuthorsResourceParam;

pub fn author_uri(app_url: &str, author_id: Uuid) -> String {
    format!("{}/api/authors/{}", app_url, author_id)
}

pub fn course_uri(app_url: &str, author_id: Uuid, course_id: Uuid) -> String {
    format!("{}/api/authors/{}/courses/{}", app_url, author_id, course_id)
}

/// URL of the author collection holding `ids`, in the `(id1,id2,...)` form.
pub fn author_collection_uri(app_url: &str, ids: &[Uuid]) -> String {
    let ids = ids
        .iter()
        .map(Uuid::to_string)
        .collect::<Vec<_>>()
        .join(",");

    format!("{}/api/authorCollections/({})", app_url, ids)
}

/// URL of one page of the author listing.
///
/// Carries the filters and ordering of `param` so following the link yields the
/// adjacent page of the same result set.
///
/// # Arguments
/// - `app_url` - Application base URL
/// - `param` - Parameters of the current listing
/// - `page_number` - One-based page the link points to
///
/// # Returns
/// - `Ok(String)` - Absolute URL with the query string
/// - `Err(url::ParseError)` - `app_url` is not a valid base URL
pub fn authors_page_uri(
    app_url: &str,
    param: &AuthorsResourceParam,
    page_number: u64,
) -> Result<String, url::ParseError> {
    let mut url = Url::parse(&format!("{}/api/authors", app_url))?;

    {
        let mut query = url.query_pairs_mut();
        if let Some(main_category) = &param.main_category {
            query.append_pair("mainCategory", main_category);
        }
        if let Some(search_query) = &param.search_query {
            query.append_pair("searchQuery", search_query);
        }
        query
            .append_pair("orderBy", &param.order_by)
            .append_pair("pageNumber", &page_number.to_string())
            .append_pair("pageSize", &param.page_size.to_string());
    }

    Ok(url.to_string())
}
