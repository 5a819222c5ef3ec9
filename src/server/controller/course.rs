use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use json_patch::Patch;
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, ValidationProblemDto},
        course::{CourseDto, CreateCourseDto, UpdateCourseDto},
    },
    server::{
        error::{validation::ValidationError, AppError},
        model::course::{CreateCourseParam, UpdateCourseParam, UpsertOutcome, PATCH_DOCUMENT_KEY},
        service::course::CourseService,
        state::AppState,
        util::uri,
    },
};

/// Tag for grouping course endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

/// Methods supported on an author's course collection.
pub const COURSES_ALLOW: &str = "GET,OPTIONS,POST";

/// Get all courses of an author.
///
/// # Returns
/// - `200 OK` - Courses ordered by title
/// - `404 Not Found` - Author not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/authors/{author_id}/courses",
    tag = COURSE_TAG,
    params(
        ("author_id" = Uuid, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Courses of the author", body = Vec<CourseDto>),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courses(
    State(state): State<AppState>,
    Path(author_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let courses = CourseService::new(&state.db)
        .get_for_author(author_id)
        .await?;

    let courses: Vec<CourseDto> = courses.into_iter().map(|c| c.into_dto()).collect();

    Ok(Json(courses))
}

/// Get a course of an author.
#[utoipa::path(
    get,
    path = "/api/authors/{author_id}/courses/{course_id}",
    tag = COURSE_TAG,
    params(
        ("author_id" = Uuid, Path, description = "Author ID"),
        ("course_id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "The course", body = CourseDto),
        (status = 404, description = "Author or course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path((author_id, course_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::new(&state.db)
        .get(author_id, course_id)
        .await?;

    Ok(Json(course.into_dto()))
}

/// Create a course for an author.
///
/// The owning author is always taken from the path.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `author_id` - Owning author
/// - `payload` - Title and optional description
///
/// # Returns
/// - `201 Created` - The created course, with its URL in `Location`
/// - `400 Bad Request` - Saving to the database failed
/// - `404 Not Found` - Author not found
/// - `422 Unprocessable Entity` - Invalid course data
#[utoipa::path(
    post,
    path = "/api/authors/{author_id}/courses",
    tag = COURSE_TAG,
    params(
        ("author_id" = Uuid, Path, description = "Author ID")
    ),
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Successfully created course", body = CourseDto),
        (status = 400, description = "Error happened while saving to the database", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 422, description = "Invalid course data", body = ValidationProblemDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_course(
    State(state): State<AppState>,
    Path(author_id): Path<Uuid>,
    payload: Result<Json<CreateCourseDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let param = CreateCourseParam::from_dto(payload)?;

    let course = CourseService::new(&state.db)
        .create(author_id, param)
        .await?;

    Ok((
        StatusCode::CREATED,
        [(
            header::LOCATION,
            uri::course_uri(&state.app_url, author_id, course.id),
        )],
        Json(course.into_dto()),
    ))
}

/// Replace a course, creating it when it does not exist.
///
/// # Returns
/// - `201 Created` - No course existed under the id; it was created with that id
/// - `204 No Content` - The course was updated
/// - `404 Not Found` - Author not found
/// - `409 Conflict` - The course id belongs to another author
/// - `422 Unprocessable Entity` - Invalid course data
#[utoipa::path(
    put,
    path = "/api/authors/{author_id}/courses/{course_id}",
    tag = COURSE_TAG,
    params(
        ("author_id" = Uuid, Path, description = "Author ID"),
        ("course_id" = Uuid, Path, description = "Course ID")
    ),
    request_body = UpdateCourseDto,
    responses(
        (status = 201, description = "Course created under the given id", body = CourseDto),
        (status = 204, description = "Successfully updated course"),
        (status = 400, description = "Error happened while saving to the database", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 409, description = "Course id belongs to another author", body = ErrorDto),
        (status = 422, description = "Invalid course data", body = ValidationProblemDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_course(
    State(state): State<AppState>,
    Path((author_id, course_id)): Path<(Uuid, Uuid)>,
    payload: Result<Json<UpdateCourseDto>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload?;
    let param = UpdateCourseParam::from_dto(payload)?;

    let outcome = CourseService::new(&state.db)
        .upsert(author_id, course_id, param)
        .await?;

    let response = match outcome {
        UpsertOutcome::Created(course) => (
            StatusCode::CREATED,
            [(
                header::LOCATION,
                uri::course_uri(&state.app_url, author_id, course.id),
            )],
            Json(course.into_dto()),
        )
            .into_response(),
        UpsertOutcome::Updated(_) => StatusCode::NO_CONTENT.into_response(),
    };

    Ok(response)
}

/// Partially update a course with a JSON Patch document.
///
/// The operations are applied to the course's title and description; the result is
/// validated like a full update. A body that is not a valid JSON Patch document is
/// reported as a validation problem.
///
/// # Returns
/// - `204 No Content` - The course was updated
/// - `404 Not Found` - Author or course not found
/// - `422 Unprocessable Entity` - Invalid document or invalid patched course
#[utoipa::path(
    patch,
    path = "/api/authors/{author_id}/courses/{course_id}",
    tag = COURSE_TAG,
    params(
        ("author_id" = Uuid, Path, description = "Author ID"),
        ("course_id" = Uuid, Path, description = "Course ID")
    ),
    request_body(content = Object, content_type = "application/json-patch+json",
        description = "JSON Patch operations on title and description"),
    responses(
        (status = 204, description = "Successfully updated course"),
        (status = 400, description = "Error happened while saving to the database", body = ErrorDto),
        (status = 404, description = "Author or course not found", body = ErrorDto),
        (status = 422, description = "Invalid patch document or course data", body = ValidationProblemDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn partially_update_course(
    State(state): State<AppState>,
    Path((author_id, course_id)): Path<(Uuid, Uuid)>,
    payload: Result<Json<Patch>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(patch) =
        payload.map_err(|e| ValidationError::single(PATCH_DOCUMENT_KEY, e.body_text()))?;

    CourseService::new(&state.db)
        .patch(author_id, course_id, &patch)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a course of an author.
#[utoipa::path(
    delete,
    path = "/api/authors/{author_id}/courses/{course_id}",
    tag = COURSE_TAG,
    params(
        ("author_id" = Uuid, Path, description = "Author ID"),
        ("course_id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted course"),
        (status = 400, description = "Error happened while saving to the database", body = ErrorDto),
        (status = 404, description = "Author or course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    Path((author_id, course_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    CourseService::new(&state.db)
        .delete(author_id, course_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the methods supported on an author's course collection.
#[utoipa::path(
    options,
    path = "/api/authors/{author_id}/courses",
    tag = COURSE_TAG,
    params(
        ("author_id" = Uuid, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Supported methods in the Allow header")
    ),
)]
pub async fn get_courses_options() -> impl IntoResponse {
    (StatusCode::OK, [(header::ALLOW, COURSES_ALLOW)])
}
