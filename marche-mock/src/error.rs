//! API error type for the mock backend

use axum::Json;
use axum::response::{IntoResponse, Response};
use shared::error::{ErrorBody, ErrorCode};
use shared::FieldErrors;
use thiserror::Error;

/// Error returned by handlers; rendered as [`ErrorBody`] JSON
#[derive(Debug, Clone, Error)]
#[error("{}", .body.message)]
pub struct ApiError {
    pub code: ErrorCode,
    pub body: ErrorBody,
}

impl ApiError {
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            body: ErrorBody::new(code),
        }
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            body: ErrorBody::with_message(code, message),
        }
    }

    pub fn validation(errors: &FieldErrors) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            body: ErrorBody::validation(errors),
        }
    }

    pub fn unauthorized() -> Self {
        Self::new(ErrorCode::NotAuthenticated)
    }

    pub fn role_required(role: shared::models::Role) -> Self {
        Self::with_message(
            ErrorCode::RoleRequired,
            format!("This action requires the {} role", role),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.http_status(), Json(self.body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
