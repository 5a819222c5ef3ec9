//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod validation;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, validation::ValidationError},
};

/// Message returned to clients when persisting changes fails.
pub const SAVE_FAILED_MESSAGE: &str = "Error happened while saving to the database";
/// Validation key for request bodies that could not be read into the expected shape.
pub const REQUEST_BODY_KEY: &str = "body";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. `ValidationError` handles its own response mapping, while generic
/// variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Request payload failed validation.
    ///
    /// Delegates to `ValidationError::into_response()` for the 422 problem body.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Database read error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Writing or committing changes to the database failed.
    ///
    /// Results in 400 Bad Request with `SAVE_FAILED_MESSAGE`; the cause is logged.
    #[error("Failed to save changes: {0}")]
    SaveFailed(#[source] sea_orm::DbErr),

    /// JSON serialization error, e.g. while building the pagination header.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// Failure to build a resource URL from the configured application URL.
    #[error(transparent)]
    UrlErr(#[from] url::ParseError),

    /// Request body rejected before it could be parsed, e.g. a missing
    /// `Content-Type: application/json` header.
    ///
    /// Responds with axum's own status for the rejection.
    #[error(transparent)]
    BodyRejected(JsonRejection),

    /// Socket or listener error while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Request conflicts with the current state of a resource.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `SaveFailed`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
/// - 422 Unprocessable Entity - For `ValidationErr`
/// - axum's rejection status - For `BodyRejected`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BodyRejected(rejection) => rejection.into_response(),
            Self::SaveFailed(err) => {
                tracing::error!("Failed to save changes: {}", err);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: SAVE_FAILED_MESSAGE.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Maps a JSON body that is malformed or does not match the expected type to a
/// validation problem under `REQUEST_BODY_KEY`.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                Self::ValidationErr(ValidationError::single(
                    REQUEST_BODY_KEY,
                    rejection.body_text(),
                ))
            }
            rejection => Self::BodyRejected(rejection),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
