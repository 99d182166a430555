//! Domain-level error types.
//!
//! These errors are transport agnostic. Business logic classifies a failure
//! by [`ErrorKind`] only; the inbound HTTP adapter decides which status code
//! a kind becomes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse classification of a domain failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The addressed resource does not exist.
    NotFound,
    /// The input failed a domain rule.
    Validation,
    /// The operation clashes with existing state.
    Conflict,
    /// Anything the domain did not anticipate.
    Unexpected,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::NotFound,
        Self::Validation,
        Self::Conflict,
        Self::Unexpected,
    ];

    /// Stable wire code for this kind.
    #[must_use]
    pub const fn as_code(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Validation => "validation",
            Self::Conflict => "conflict",
            Self::Unexpected => "unexpected",
        }
    }

    /// Parse a wire code, returning `None` for codes this crate does not know.
    ///
    /// # Examples
    /// ```
    /// use crud_api::domain::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::from_code("conflict"), Some(ErrorKind::Conflict));
    /// assert_eq!(ErrorKind::from_code("gone"), None);
    /// ```
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_code() == code)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Raised when a wire code names no known [`ErrorKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown error kind `{code}`")]
pub struct UnknownErrorKind {
    code: String,
}

impl UnknownErrorKind {
    /// The rejected code.
    #[must_use]
    pub const fn code(&self) -> &str {
        self.code.as_str()
    }
}

impl FromStr for ErrorKind {
    type Err = UnknownErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownErrorKind { code: s.to_owned() })
    }
}

/// Failure as seen by inbound adapters.
///
/// The message is the [`Display`](std::fmt::Display) rendering of the error.
/// Implementors return `None` from [`DomainFailure::kind`] when they carry a
/// classification outside [`ErrorKind`], for instance a kind added by a
/// collaborator that adapters have not caught up with yet.
pub trait DomainFailure: std::error::Error {
    /// Classification of the failure, if it is one adapters understand.
    fn kind(&self) -> Option<ErrorKind>;
}

/// Domain error payload.
///
/// # Examples
/// ```
/// use crud_api::domain::{DomainError, ErrorKind};
///
/// let err = DomainError::not_found("user 42 not found");
/// assert_eq!(err.kind(), ErrorKind::NotFound);
/// assert_eq!(err.to_string(), "user 42 not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(deny_unknown_fields)]
#[error("{message}")]
pub struct DomainError {
    kind: ErrorKind,
    message: String,
}

impl DomainError {
    /// Create an error of the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Convenience constructor for [`ErrorKind::NotFound`].
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Convenience constructor for [`ErrorKind::Validation`].
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Convenience constructor for [`ErrorKind::Conflict`].
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Convenience constructor for [`ErrorKind::Unexpected`].
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }

    /// Failure classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Human-readable message.
    #[must_use]
    pub const fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl DomainFailure for DomainError {
    fn kind(&self) -> Option<ErrorKind> {
        Some(self.kind)
    }
}

#[cfg(test)]
mod tests;
