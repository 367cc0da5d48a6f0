/**
 * Routes Module
 * API route handlers and the error-to-response translation they share
 */
pub mod blog;
pub mod careers;
pub mod contact;
pub mod content;
pub mod health;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde::Serialize;
use thiserror::Error;

use crate::schema::{FieldError, ValidationErrors};
use crate::storage::StorageError;

/// Failures a handler can surface. Anything not a validation or not-found
/// case becomes a 500 with a generic message; internals stay in the logs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation error")]
    Validation(#[from] ValidationErrors),
    #[error("{0}")]
    NotFound(&'static str),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Error body shared by every failure response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl ErrorBody {
    fn message(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(validation) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    success: false,
                    message: "Validation error".to_string(),
                    errors: Some(validation.errors),
                }),
            )
                .into_response(),
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(ErrorBody::message(message))).into_response()
            }
            ApiError::Storage(err) => {
                tracing::error!(error = %err, "storage operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody::message("Internal server error")),
                )
                    .into_response()
            }
        }
    }
}

/// JSON body extractor that reports deserialization failures (syntax
/// errors, type mismatches, wrong content type) in the same 400 validation
/// shape as field-level failures, instead of axum's default rejection.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::Validation(ValidationErrors {
                errors: vec![FieldError {
                    field: "body",
                    message: rejection.body_text(),
                }],
            })),
        }
    }
}
