use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, ValidationProblemDto},
        author::{AuthorDto, CreateAuthorDto},
    },
    server::{
        error::AppError,
        model::author::{AuthorsResourceParam, CreateAuthorParam},
        service::author::AuthorService,
        state::AppState,
        util::uri,
    },
};

/// Tag for grouping author endpoints in OpenAPI documentation
pub static AUTHOR_TAG: &str = "author";

/// Response header carrying the paging metadata of the author listing.
pub const PAGINATION_HEADER: &str = "x-pagination";

/// Methods supported on the author collection resource.
pub const AUTHORS_ALLOW: &str = "GET,OPTIONS,POST";

/// Raw query string of the author listing.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AuthorsQuery {
    /// Exact main category to filter on
    pub main_category: Option<String>,
    /// Text searched for in main category, first name and last name
    pub search_query: Option<String>,
    /// One-based page number (default: 1)
    pub page_number: Option<u64>,
    /// Items per page, at most 20 (default: 10)
    pub page_size: Option<u64>,
    /// `name` orders by first then last name (default: name)
    pub order_by: Option<String>,
}

/// Get a page of authors.
///
/// Returns the authors matching the filters in the query string. Paging metadata,
/// including links to the previous and next page, is returned as JSON in the
/// `X-Pagination` header.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Filters, ordering and paging
///
/// # Returns
/// - `200 OK` - Authors on the requested page
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/authors",
    tag = AUTHOR_TAG,
    params(AuthorsQuery),
    responses(
        (status = 200, description = "Authors on the requested page", body = Vec<AuthorDto>,
            headers(("X-Pagination" = String, description = "Paging metadata as JSON"))),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_authors(
    State(state): State<AppState>,
    Query(query): Query<AuthorsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let param = AuthorsResourceParam::new(
        query.main_category,
        query.search_query,
        query.page_number,
        query.page_size,
        query.order_by,
    );

    let page = AuthorService::new(&state.db).get_paged(&param).await?;

    let previous_page_link = if page.has_previous() {
        Some(uri::authors_page_uri(
            &state.app_url,
            &param,
            page.current_page - 1,
        )?)
    } else {
        None
    };
    let next_page_link = if page.has_next() {
        Some(uri::authors_page_uri(
            &state.app_url,
            &param,
            page.current_page + 1,
        )?)
    } else {
        None
    };

    let metadata = serde_json::to_string(&page.metadata(previous_page_link, next_page_link))?;
    let metadata = HeaderValue::from_str(&metadata)
        .map_err(|e| AppError::InternalError(format!("Invalid pagination header: {}", e)))?;

    let now = Utc::now();
    let page = page.map(|a| a.into_dto(now));

    Ok((
        [(HeaderName::from_static(PAGINATION_HEADER), metadata)],
        Json(page.items),
    ))
}

/// Get an author by id.
///
/// # Returns
/// - `200 OK` - The author
/// - `400 Bad Request` - Nil author id
/// - `404 Not Found` - No author with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/authors/{author_id}",
    tag = AUTHOR_TAG,
    params(
        ("author_id" = Uuid, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "The author", body = AuthorDto),
        (status = 400, description = "Invalid author id", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_author(
    State(state): State<AppState>,
    Path(author_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let author = AuthorService::new(&state.db)
        .get_by_id(author_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Author Not Found".to_string()))?;

    Ok(Json(author.into_dto(Utc::now())))
}

/// Create an author.
///
/// Creates an author together with the courses listed in the payload. The author and
/// its courses are stored in a single transaction.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Author fields and optional initial courses
///
/// # Returns
/// - `201 Created` - The created author, with its URL in `Location`
/// - `400 Bad Request` - Saving to the database failed
/// - `422 Unprocessable Entity` - Invalid author or course data
#[utoipa::path(
    post,
    path = "/api/authors",
    tag = AUTHOR_TAG,
    request_body = CreateAuthorDto,
    responses(
        (status = 201, description = "Successfully created author", body = AuthorDto),
        (status = 400, description = "Error happened while saving to the database", body = ErrorDto),
        (status = 422, description = "Invalid author data", body = ValidationProblemDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_author(
    State(state): State<AppState>,
    payload: Result<Json<CreateAuthorDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let param = CreateAuthorParam::from_dto(payload)?;

    let author = AuthorService::new(&state.db).create(param).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, uri::author_uri(&state.app_url, author.id))],
        Json(author.into_dto(Utc::now())),
    ))
}

/// List the methods supported on the author collection.
#[utoipa::path(
    options,
    path = "/api/authors",
    tag = AUTHOR_TAG,
    responses(
        (status = 200, description = "Supported methods in the Allow header")
    ),
)]
pub async fn get_authors_options() -> impl IntoResponse {
    (StatusCode::OK, [(header::ALLOW, AUTHORS_ALLOW)])
}

/// Delete an author and all of its courses.
///
/// # Returns
/// - `204 No Content` - Author deleted
/// - `400 Bad Request` - Nil author id or saving to the database failed
/// - `404 Not Found` - No author with that id
#[utoipa::path(
    delete,
    path = "/api/authors/{author_id}",
    tag = AUTHOR_TAG,
    params(
        ("author_id" = Uuid, Path, description = "Author ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted author"),
        (status = 400, description = "Invalid author id or save failure", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_author(
    State(state): State<AppState>,
    Path(author_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = AuthorService::new(&state.db).delete(author_id).await?;

    if !deleted {
        return Err(AppError::NotFound("Author Not Found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
