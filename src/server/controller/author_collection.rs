use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::{ErrorDto, ValidationProblemDto},
        author::{AuthorDto, CreateAuthorDto},
    },
    server::{
        error::{validation::ValidationError, AppError},
        model::author::CreateAuthorParam,
        service::author::AuthorService,
        state::AppState,
        util::{parse::parse_id_list, uri},
    },
};

/// Tag for grouping author collection endpoints in OpenAPI documentation
pub static AUTHOR_COLLECTION_TAG: &str = "authorCollection";

/// Get a set of authors by id.
///
/// The ids are given as a comma separated list in parentheses, e.g.
/// `/api/authorCollections/(id1,id2)`.
///
/// # Returns
/// - `200 OK` - The authors ordered by first name then last name
/// - `400 Bad Request` - Empty or malformed id list
/// - `404 Not Found` - At least one id is unknown
#[utoipa::path(
    get,
    path = "/api/authorCollections/{ids}",
    tag = AUTHOR_COLLECTION_TAG,
    params(
        ("ids" = String, Path, description = "Comma separated author IDs in parentheses")
    ),
    responses(
        (status = 200, description = "The requested authors", body = Vec<AuthorDto>),
        (status = 400, description = "Empty or malformed id list", body = ErrorDto),
        (status = 404, description = "One or more authors not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_author_collection(
    State(state): State<AppState>,
    Path(ids): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let ids = parse_id_list(&ids)?;

    let authors = AuthorService::new(&state.db).get_collection(&ids).await?;

    let now = Utc::now();
    let authors: Vec<AuthorDto> = authors.into_iter().map(|a| a.into_dto(now)).collect();

    Ok(Json(authors))
}

/// Create several authors at once.
///
/// Every author is validated first; errors are reported per item as
/// `[index].<field>`. All authors are stored in a single transaction.
///
/// # Returns
/// - `201 Created` - The created authors, with the collection URL in `Location`
/// - `400 Bad Request` - Empty list or saving to the database failed
/// - `422 Unprocessable Entity` - Invalid author data
#[utoipa::path(
    post,
    path = "/api/authorCollections",
    tag = AUTHOR_COLLECTION_TAG,
    request_body = Vec<CreateAuthorDto>,
    responses(
        (status = 201, description = "Successfully created authors", body = Vec<AuthorDto>),
        (status = 400, description = "Empty list or save failure", body = ErrorDto),
        (status = 422, description = "Invalid author data", body = ValidationProblemDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_author_collection(
    State(state): State<AppState>,
    payload: Result<Json<Vec<CreateAuthorDto>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let mut errors = ValidationError::new();
    let mut params = Vec::with_capacity(payload.len());
    for (index, dto) in payload.into_iter().enumerate() {
        match CreateAuthorParam::from_dto(dto) {
            Ok(param) => params.push(param),
            Err(item_errors) => errors.merge_prefixed(&format!("[{}].", index), item_errors),
        }
    }
    let params = errors.into_result(params)?;

    let authors = AuthorService::new(&state.db)
        .create_collection(params)
        .await?;

    let ids: Vec<_> = authors.iter().map(|a| a.id).collect();
    let location = uri::author_collection_uri(&state.app_url, &ids);

    let now = Utc::now();
    let authors: Vec<AuthorDto> = authors.into_iter().map(|a| a.into_dto(now)).collect();

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(authors),
    ))
}
