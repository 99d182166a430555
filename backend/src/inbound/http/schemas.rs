//! Wire payloads rendered by the HTTP adapter.
//!
//! Domain types stay free of `utoipa`; anything documented in the `OpenAPI`
//! document lives here.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON envelope returned for every API error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ErrorBody {
    /// Numeric HTTP status, repeated for clients that lose the status line.
    #[schema(example = 404)]
    pub status: u16,
    /// Message safe to show to API consumers.
    #[schema(example = "user 42 not found")]
    pub message: String,
}
