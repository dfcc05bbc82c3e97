//! OpenAPI schema definitions for request contracts and errors.
//!
//! Request contracts are validated from raw JSON and carry secrets, so they
//! do not derive `ToSchema` or `Serialize`. This module describes their wire
//! shape, including the constraints the domain enforces, using utoipa's
//! external schema registration.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Authentication failed or is missing.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// The request conflicts with existing state.
    #[schema(rename = "conflict")]
    Conflict,
    /// The request body exceeds the accepted size.
    #[schema(rename = "payload_too_large")]
    PayloadTooLarge,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::FieldViolation`].
#[derive(ToSchema)]
#[schema(as = crate::domain::FieldViolation)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FieldViolationSchema {
    /// JSON field name, or `$` for the payload itself.
    #[schema(example = "password")]
    field: String,
    /// Stable machine-readable reason.
    #[schema(example = "too_short")]
    code: String,
    /// Human-readable reason.
    #[schema(example = "min length 8")]
    message: String,
}

/// Details attached to `invalid_request` errors.
#[derive(ToSchema)]
#[schema(as = ValidationDetails)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ValidationDetailsSchema {
    /// Every violated constraint, in field order.
    violations: Vec<FieldViolationSchema>,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "request validation failed")]
    message: String,
    /// Supplementary error details; validation failures list violations.
    details: Option<ValidationDetailsSchema>,
}

/// OpenAPI schema for [`crate::domain::UserRegistration`].
#[derive(ToSchema)]
#[schema(as = crate::domain::UserRegistration)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserRegistrationSchema {
    /// Address to register.
    #[schema(format = "email", example = "ada@example.com")]
    email: String,
    /// Password of at least eight characters.
    #[schema(format = "password", min_length = 8)]
    password: String,
    /// Given name.
    #[schema(min_length = 1, example = "Ada")]
    first_name: String,
    /// Family name.
    #[schema(min_length = 1, example = "Lovelace")]
    last_name: String,
}

/// OpenAPI schema for [`crate::domain::UserLogin`].
#[derive(ToSchema)]
#[schema(as = crate::domain::UserLogin)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserLoginSchema {
    /// Address to authenticate.
    #[schema(format = "email", example = "ada@example.com")]
    email: String,
    /// Password to verify.
    #[schema(format = "password")]
    password: String,
}

/// OpenAPI schema for [`crate::domain::CapabilityRegistration`].
///
/// Declares no properties: the registrant is taken from the authenticated
/// session, never from the body.
#[derive(ToSchema)]
#[schema(as = crate::domain::CapabilityRegistration)]
pub struct CapabilityRegistrationSchema {}
