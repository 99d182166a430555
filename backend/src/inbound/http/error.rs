//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep [`DomainError`] HTTP-agnostic while giving Actix handlers a
//! single place where a failure kind becomes a status code and a JSON body.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;
use tracing::{debug, error};

use super::schemas::ErrorBody;
use super::status::ApiStatus;
use crate::domain::{DomainError, DomainFailure, ErrorKind};

/// Message sent to clients when a failure's kind is not recognised.
pub const UNRECOGNISED_FAILURE_MESSAGE: &str = "An unexpected error occurred";

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error value shaped for HTTP transport.
///
/// # Examples
/// ```
/// use crud_api::inbound::http::ApiError;
///
/// let err = ApiError::not_found("user 42 not found");
/// assert_eq!(err.status_code(), 404);
/// assert_eq!(err.to_string(), "user 42 not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    status: ApiStatus,
    message: String,
}

impl ApiError {
    fn with_status(status: ApiStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 400 Bad Request.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::with_status(ApiStatus::BadRequest, message)
    }

    /// 409 Conflict.
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::with_status(ApiStatus::Conflict, message)
    }

    /// 500 Internal Server Error.
    #[must_use]
    pub fn server_error(message: impl Into<String>) -> Self {
        Self::with_status(ApiStatus::ServerError, message)
    }

    /// 404 Not Found.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_status(ApiStatus::NotFound, message)
    }

    /// Numeric HTTP status code.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Status as a closed enumeration.
    #[must_use]
    pub const fn status(&self) -> ApiStatus {
        self.status
    }

    /// Message exposed to the client.
    #[must_use]
    pub const fn message(&self) -> &str {
        self.message.as_str()
    }

    fn body(&self) -> ErrorBody {
        ErrorBody {
            status: self.status_code(),
            message: self.message.clone(),
        }
    }
}

/// Translate a domain failure into the error sent to clients.
///
/// Recognised kinds keep their message. A failure whose kind is unknown is
/// reported as a 500 with [`UNRECOGNISED_FAILURE_MESSAGE`]; its own message
/// is only logged.
///
/// # Examples
/// ```
/// use crud_api::domain::DomainError;
/// use crud_api::inbound::http::map;
///
/// let api = map(&DomainError::conflict("username already taken"));
/// assert_eq!(api.status_code(), 409);
/// assert_eq!(api.message(), "username already taken");
/// ```
#[must_use]
pub fn map<E>(failure: &E) -> ApiError
where
    E: DomainFailure + ?Sized,
{
    let Some(kind) = failure.kind() else {
        error!(error = %failure, "unrecognised domain failure kind; detail withheld from client");
        return ApiError::server_error(UNRECOGNISED_FAILURE_MESSAGE);
    };

    let message = failure.to_string();
    let mapped = match kind {
        ErrorKind::NotFound => ApiError::not_found(message),
        ErrorKind::Validation => ApiError::bad_request(message),
        ErrorKind::Conflict => ApiError::conflict(message),
        ErrorKind::Unexpected => {
            error!(error = %message, "unexpected domain failure surfaced as 500");
            ApiError::server_error(message)
        }
    };
    debug!(%kind, status = mapped.status_code(), "domain failure mapped");
    mapped
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        map(&err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status.into()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status.into()).json(self.body())
    }
}
