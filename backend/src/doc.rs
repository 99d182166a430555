//! `OpenAPI` documentation configuration.
//!
//! [`ApiDoc`] publishes the error envelope ([`ErrorBody`]) and one reusable
//! response component per status the error mapper can produce, so endpoint
//! descriptions elsewhere can reference them by name.
//!
//! Exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::{ApiStatus, ErrorBody};
use utoipa::openapi::{ContentBuilder, Ref, RefOr, ResponseBuilder};
use utoipa::{Modify, OpenApi};

/// Reusable error responses, keyed by component name.
pub const ERROR_RESPONSES: [(&str, ApiStatus, &str); 4] = [
    ("BadRequest", ApiStatus::BadRequest, "The request failed validation."),
    ("NotFound", ApiStatus::NotFound, "The resource does not exist."),
    ("Conflict", ApiStatus::Conflict, "The request conflicts with existing state."),
    ("ServerError", ApiStatus::ServerError, "An unexpected internal failure."),
];

/// Register the error responses under `components.responses`.
struct ErrorResponsesAddon;

impl Modify for ErrorResponsesAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        for (name, status, description) in ERROR_RESPONSES {
            let response = ResponseBuilder::new()
                .description(format!("{} {description}", status.as_u16()))
                .content(
                    "application/json",
                    ContentBuilder::new()
                        .schema(Some(Ref::from_schema_name("ErrorBody")))
                        .build(),
                )
                .build();
            components
                .responses
                .insert(name.to_owned(), RefOr::T(response));
        }
    }
}

/// `OpenAPI` document for the error surface of the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&ErrorResponsesAddon),
    info(
        title = "CRUD API errors",
        description = "Error envelope and status codes returned by the CRUD API."
    ),
    components(schemas(ErrorBody))
)]
pub struct ApiDoc;
