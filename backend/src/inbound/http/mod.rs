//! HTTP inbound adapter: status taxonomy, error mapping and wire payloads.

pub mod error;
pub mod schemas;
pub mod status;

pub use error::{ApiError, ApiResult, UNRECOGNISED_FAILURE_MESSAGE, map};
pub use schemas::ErrorBody;
pub use status::ApiStatus;
