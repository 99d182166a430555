//! Domain primitives.
//!
//! Purpose: hold the transport-agnostic failure vocabulary used by business
//! logic. Inbound adapters translate these into protocol-specific envelopes.
//!
//! Public surface:
//! - `DomainError` (alias to `error::DomainError`) — kind plus message.
//! - `ErrorKind` (alias to `error::ErrorKind`) — closed failure taxonomy.
//! - `DomainFailure` (alias to `error::DomainFailure`) — what adapters consume.

pub mod error;

pub use self::error::{DomainError, DomainFailure, ErrorKind, UnknownErrorKind};
