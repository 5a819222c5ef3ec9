//! CORS handling that leaves plain OPTIONS requests to the routes.
//!
//! `CorsLayer` answers every OPTIONS request itself, which would hide the OPTIONS
//! handlers advertising the `Allow` header. Only requests carrying
//! `Access-Control-Request-Method` are preflights; everything else with the OPTIONS
//! method is sent straight to the routes.

use axum::{
    extract::{Request, State},
    http::{header, Method},
    middleware::Next,
    response::Response,
    Router,
};
use tower::ServiceExt;

/// Whether the request is a CORS preflight rather than a plain OPTIONS call.
pub fn is_preflight(request: &Request) -> bool {
    request.method() == Method::OPTIONS
        && request
            .headers()
            .contains_key(header::ACCESS_CONTROL_REQUEST_METHOD)
}

/// Routes plain OPTIONS requests around the CORS layer.
///
/// Must be layered outside `CorsLayer`, with the routes the CORS layer wraps as state.
///
/// # Arguments
/// - `routes` - The API routes without CORS
/// - `request` - Incoming request
/// - `next` - The CORS-wrapped stack
pub async fn bypass_plain_options(
    State(routes): State<Router>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS && !is_preflight(&request) {
        return match routes.oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        };
    }

    next.run(request).await
}
