use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;
use uuid::Uuid;

use crate::server::{model::author::MAX_PAGE_NUMBER, router, state::AppState};


const APP_URL: &str = "http://localhost:8080";

/// Builds the application on top of a fresh in-memory database.
///
/// The context is returned so the database outlives the requests.
async fn setup() -> (TestContext, Router) {
    let test = TestBuilder::new()
        .with_course_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap().clone();

    let app = router::app(AppState::new(db, APP_URL.to_string()));

    (test, app)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    send_with_content_type(app, method, uri, body, "application/json").await
}

async fn send_with_content_type(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    content_type: &str,
) -> Response {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

async fn read_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

fn header_value(response: &Response, name: &str) -> String {
    response
        .headers()
        .get(name)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string()
}
