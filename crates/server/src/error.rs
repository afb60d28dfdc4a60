//! Unified error handling.
//!
//! Provides a unified `AppError` type mapping the service error
//! taxonomy onto HTTP statuses and a JSON error envelope. All route
//! handlers return `Result<T, AppError>`.
//!
//! The envelope is `{"error": {"kind": ..., "message": ...}}` where
//! `kind` is one of `validation_error`, `conflict`, `unauthorized`,
//! `not_found`, or `internal`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::{AuthError, OrderError, RegistrationError, RoleError};

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Registration failed.
    #[error("registration error: {0}")]
    Registration(#[from] RegistrationError),

    /// Authentication failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Role operation failed.
    #[error("role error: {0}")]
    Role(#[from] RoleError),

    /// Order operation failed.
    #[error("order error: {0}")]
    Order(#[from] OrderError),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Missing or invalid session.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated, but the role does not permit the action.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Bad request from client.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Machine-readable error kinds carried in the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    ValidationError,
    Conflict,
    Unauthorized,
    NotFound,
    Internal,
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    kind: ErrorKind,
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

impl AppError {
    /// The HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Registration(err) => match err {
                RegistrationError::InvalidEmail(_)
                | RegistrationError::PasswordTooShort
                | RegistrationError::PasswordMismatch => StatusCode::BAD_REQUEST,
                RegistrationError::DuplicateEmail => StatusCode::CONFLICT,
                RegistrationError::PasswordHash | RegistrationError::Store(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::PasswordHash => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Role(err) => match err {
                RoleError::Unauthorized => StatusCode::FORBIDDEN,
                RoleError::CustomerNotFound => StatusCode::NOT_FOUND,
            },
            Self::Order(err) => match err {
                OrderError::EmptyCart | OrderError::InvalidQuantity(_) => StatusCode::BAD_REQUEST,
                OrderError::ProductNotFound(_) | OrderError::OrderNotFound => {
                    StatusCode::NOT_FOUND
                }
                OrderError::Unauthorized => StatusCode::FORBIDDEN,
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The envelope kind for this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self.status().as_u16() {
            400 => ErrorKind::ValidationError,
            409 => ErrorKind::Conflict,
            401 | 403 => ErrorKind::Unauthorized,
            404 => ErrorKind::NotFound,
            _ => ErrorKind::Internal,
        }
    }

    /// Human-readable message, safe to return to the client.
    fn message(&self) -> String {
        match self {
            Self::Registration(err) => err.to_string(),
            Self::Auth(err) => err.to_string(),
            Self::Role(err) => err.to_string(),
            Self::Order(err) => err.to_string(),
            Self::NotFound(msg)
            | Self::Unauthorized(msg)
            | Self::Forbidden(msg)
            | Self::BadRequest(msg) => msg.clone(),
            Self::Internal(_) => "internal server error".to_owned(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "request error");
        }

        let body = ErrorEnvelope {
            error: ErrorDetail {
                kind: self.kind(),
                message: self.message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
