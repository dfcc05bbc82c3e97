//! Domain contracts and value types.
//!
//! Purpose: define the shapes that cross the service boundary and the rules
//! each field must satisfy. Keep types immutable and document invariants and
//! serialisation contracts (serde) in each type's Rustdoc. Nothing here
//! performs I/O, logs, or knows about HTTP.
//!
//! Public surface:
//! - UserRegistration, UserLogin — validated request bodies.
//! - UserResponse, TokenResponse — sanitized response bodies.
//! - CapabilityRegistration, CapabilityRegistrationRequest — capability body
//!   and its binding to an AuthenticatedUser.
//! - ValidationErrors, FieldViolation, ViolationKind — aggregated failures.
//! - Error, ErrorCode — transport-agnostic error payload.

pub mod capability;
pub mod contract;
pub mod credentials;
pub mod email;
pub mod error;
pub mod token;
pub mod user;
pub mod validation;

pub use self::capability::{AuthenticatedUser, CapabilityRegistration, CapabilityRegistrationRequest};
pub use self::contract::FromPayload;
pub use self::credentials::{PASSWORD_MIN, Password, PersonName};
pub use self::email::EmailAddress;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::token::{DEFAULT_TOKEN_TYPE, TokenResponse};
pub use self::user::{UserLogin, UserRegistration, UserResponse};
pub use self::validation::{
    FieldViolation, ParseUnknownFieldPolicyError, ROOT_PATH, UnknownFieldPolicy, ValidationErrors,
    ViolationKind,
};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use capabilities::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::unauthorized("login required"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
