/// Error types for configuration, storage and request validation
use actix_web::{error::BlockingError, http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ValidateResponse;

/// Startup configuration failures, fatal to the process
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),
}

/// License file failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("license file unreadable: {0}")]
    Io(#[from] std::io::Error),

    #[error("license file malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("license lookup aborted: {0}")]
    Blocking(#[from] BlockingError),
}

/// Terminal outcome of a rejected validation request
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("user agent not allowed")]
    InvalidUserAgent,

    #[error("missing hwid, key or signature")]
    MissingParameters,

    #[error("signature mismatch")]
    SignatureMismatch,

    #[error("no license for hwid/key pair")]
    InvalidCredentials,

    #[error("license expired")]
    Expired,

    #[error("license store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
}

impl ValidationError {
    /// Client-facing message. Unknown and expired licenses are indistinguishable.
    pub fn message(&self) -> &'static str {
        match self {
            Self::MethodNotAllowed => "method_not_allowed",
            Self::InvalidUserAgent => "forbidden",
            Self::MissingParameters => "missing_parameters",
            Self::SignatureMismatch => "invalid_signature",
            Self::InvalidCredentials | Self::Expired => "invalid_license",
            Self::StoreUnavailable(_) => "internal_error",
        }
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(
            self,
            Self::InvalidUserAgent | Self::SignatureMismatch | Self::InvalidCredentials | Self::Expired
        )
    }
}

impl ResponseError for ValidationError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingParameters => StatusCode::BAD_REQUEST,
            Self::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::FORBIDDEN,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if matches!(self, Self::MethodNotAllowed) {
            builder.insert_header((actix_web::http::header::ALLOW, "GET"));
        }
        builder.json(ValidateResponse::failure(self.message()))
    }
}
