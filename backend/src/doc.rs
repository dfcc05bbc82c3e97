//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which publishes every contract
//! as an OpenAPI component schema. It registers:
//!
//! - **Request schemas**: wrapper types from the inbound layer
//!   ([`UserRegistrationSchema`], [`UserLoginSchema`],
//!   [`CapabilityRegistrationSchema`]) documenting field constraints
//! - **Response schemas**: [`UserResponse`] and [`TokenResponse`], derived
//!   directly from the domain types so the published shape cannot drift
//! - **Errors**: [`ErrorSchema`] and [`ErrorCodeSchema`]
//! - **Security**: bearer token authentication scheme
//!
//! The document carries no paths; routing belongs to the service that mounts
//! these contracts. It is exported via `cargo run --bin openapi-dump`.

use crate::domain::{TokenResponse, UserResponse};
use crate::inbound::http::schemas::{
    CapabilityRegistrationSchema, ErrorCodeSchema, ErrorSchema, UserLoginSchema,
    UserRegistrationSchema,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BearerToken",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .description(Some(
                        "Access token from a TokenResponse. Identifies the capability registrant.",
                    ))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the contract layer.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Capabilities contracts",
        description = "Request and response shapes for registration, login, token issuance and capability registration.",
        license(name = "MIT", url = "https://opensource.org/license/mit")
    ),
    components(schemas(
        UserRegistrationSchema,
        UserLoginSchema,
        CapabilityRegistrationSchema,
        UserResponse,
        TokenResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "users", description = "Registration, login and token issuance"),
        (name = "capabilities", description = "Capability registration")
    )
)]
pub struct ApiDoc;
