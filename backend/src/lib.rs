//! CRUD API backend: translation of domain failures into HTTP errors.
//!
//! Business logic reports failures as [`domain::DomainError`] (or any
//! [`domain::DomainFailure`]); handlers hand them to
//! [`inbound::http::map`] and return the resulting
//! [`inbound::http::ApiError`], which Actix renders as a JSON envelope.

pub mod doc;
pub mod domain;
pub mod inbound;

/// Public `OpenAPI` surface used by tooling.
pub use doc::ApiDoc;
