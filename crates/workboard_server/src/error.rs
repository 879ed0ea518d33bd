//! HTTP error envelope and startup failures.
//!
//! # Invariants
//! - Client errors carry a descriptive message.
//! - Server errors never leak internal detail; the detail is logged instead.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde::Serialize;
use std::net::SocketAddr;
use workboard_core::{DbError, EntityKind, RecordId, RepoError, SeedError, ValidationError};

/// Error returned by request handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    MalformedRequest(String),
    #[error(transparent)]
    Validation(ValidationError),
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: RecordId },
    #[error("no route for {0}")]
    UnknownRoute(String),
    #[error("{0}")]
    Reference(String),
    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound { .. } | Self::UnknownRoute(_) => StatusCode::NOT_FOUND,
            Self::Reference(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedRequest(_) => "malformed_request",
            Self::Validation(_) => "validation_error",
            Self::NotFound { .. } | Self::UnknownRoute(_) => "not_found",
            Self::Reference(_) => "reference_error",
            Self::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Internal(detail) => {
                error!(
                    "event=http_error module=http status=error error_code={} error={}",
                    self.code(),
                    detail
                );
                "internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorBody {
            error: self.code(),
            message,
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            RepoError::NotFound { kind, id } => Self::NotFound { kind, id },
            err @ RepoError::Reference { .. } => Self::Reference(err.to_string()),
            err @ (RepoError::Db(_) | RepoError::InvalidData(_)) => {
                Self::Internal(err.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::MalformedRequest(value.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(value: PathRejection) -> Self {
        Self::MalformedRequest(value.body_text())
    }
}

/// Failure that prevents the service from starting.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("failed to open database: {0}")]
    Database(#[from] DbError),
    #[error("seed load failed: {0}")]
    Seed(#[from] SeedError),
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server stopped with error: {0}")]
    Serve(#[source] std::io::Error),
}
