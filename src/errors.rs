//! Unified error types and HTTP response mapping.
//!
//! Services return [`Error`] values; the HTTP layer converts them into
//! responses through the [`IntoResponse`] impl. Mapped domain errors carry a
//! user-facing message; anything else degrades to a generic 500 with only the
//! error name logged server-side.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    PaymentRequired(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

impl Error {
    /// Bad request with a caller-supplied message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Unauthorized with the stock message used across the API.
    pub fn unauthorized() -> Self {
        Self::Unauthorized("You must be signed in to continue".to_string())
    }

    /// Payment required with the stock message used across the API.
    pub fn payment_required() -> Self {
        Self::PaymentRequired("Could not find payment information".to_string())
    }

    /// Not found with the stock message used across the API.
    pub fn not_found() -> Self {
        Self::NotFound("No result for this search!".to_string())
    }

    /// Stable error name, used for logging and status mapping.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BadRequestError",
            Self::Unauthorized(_) => "UnauthorizedError",
            Self::PaymentRequired(_) => "PaymentRequiredError",
            Self::NotFound(_) => "NotFoundError",
            Self::Config(_) => "ConfigError",
            Self::Database(_) => "DatabaseError",
            Self::Io(_) => "IoError",
            Self::EnvVar(_) => "EnvVarError",
        }
    }

    /// HTTP status for mapped domain errors; None means "unanticipated".
    const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::BadRequest(_) => Some(StatusCode::BAD_REQUEST),
            Self::Unauthorized(_) => Some(StatusCode::UNAUTHORIZED),
            Self::PaymentRequired(_) => Some(StatusCode::PAYMENT_REQUIRED),
            Self::NotFound(_) => Some(StatusCode::NOT_FOUND),
            Self::Config(_) | Self::Database(_) | Self::Io(_) | Self::EnvVar(_) => None,
        }
    }
}

/// Error response body (JSON).
#[derive(Debug, Serialize)]
struct ErrorBody {
    /// Present only for the generic 500 response.
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
    /// Human-readable error message.
    message: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        if let Some(status) = self.status() {
            let body = ErrorBody {
                error: None,
                message: self.to_string(),
            };
            return (status, Json(body)).into_response();
        }

        // Unmapped error: log the name only, answer with a generic message.
        tracing::error!(error = self.name(), "unhandled application error");
        let body = ErrorBody {
            error: Some("InternalServerError"),
            message: "Internal Server Error".to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
