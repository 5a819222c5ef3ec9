use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, ValidationProblemDto},
        author::{AuthorDto, CreateAuthorDto},
        course::{CourseDto, CreateCourseDto, UpdateCourseDto},
        pagination::PaginationMetadataDto,
    },
    server::{
        controller::{
            author::{
                self, create_author, delete_author, get_author, get_authors, get_authors_options,
            },
            author_collection::{self, create_author_collection, get_author_collection},
            course::{
                self, create_course, delete_course, get_course, get_courses, get_courses_options,
                partially_update_course, update_course,
            },
        },
        middleware::cors,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Course Library API", description = "Authors and the courses they teach"),
    paths(
        author::get_authors,
        author::get_author,
        author::create_author,
        author::get_authors_options,
        author::delete_author,
        course::get_courses,
        course::get_course,
        course::create_course,
        course::update_course,
        course::partially_update_course,
        course::delete_course,
        course::get_courses_options,
        author_collection::get_author_collection,
        author_collection::create_author_collection,
    ),
    components(schemas(
        AuthorDto,
        CreateAuthorDto,
        CourseDto,
        CreateCourseDto,
        UpdateCourseDto,
        PaginationMetadataDto,
        ErrorDto,
        ValidationProblemDto,
    )),
    tags(
        (name = "author", description = "Authors"),
        (name = "course", description = "Courses of an author"),
        (name = "authorCollection", description = "Sets of authors created or fetched together"),
    )
)]
pub struct ApiDoc;

/// API routes without middleware.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/authors",
            get(get_authors)
                .post(create_author)
                .options(get_authors_options),
        )
        .route(
            "/api/authors/{author_id}",
            get(get_author).delete(delete_author),
        )
        .route(
            "/api/authors/{author_id}/courses",
            get(get_courses)
                .post(create_course)
                .options(get_courses_options),
        )
        .route(
            "/api/authors/{author_id}/courses/{course_id}",
            get(get_course)
                .put(update_course)
                .patch(partially_update_course)
                .delete(delete_course),
        )
        .route("/api/authorCollections", post(create_author_collection))
        .route("/api/authorCollections/{ids}", get(get_author_collection))
}

/// Builds the complete application: API routes, OpenAPI docs, CORS and request tracing.
///
/// CORS preflights are answered by `CorsLayer`; plain OPTIONS requests reach the
/// OPTIONS handlers.
pub fn app(state: AppState) -> Router {
    let routes = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(router())
        .with_state(state);

    routes
        .clone()
        .layer(CorsLayer::permissive())
        .layer(axum::middleware::from_fn_with_state(
            routes,
            cors::bypass_plain_options,
        ))
        .layer(TraceLayer::new_for_http())
}
