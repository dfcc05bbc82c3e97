//! User contracts: registration and login requests, and the sanitized user
//! projection returned to clients.
//!
//! Request shapes are built from untrusted input and report every violation
//! at once. [`UserResponse`] is built from trusted state and has no secret
//! fields at all, so a password cannot leak through it.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::contract::FromPayload;
use super::credentials::{Password, PersonName};
use super::email::EmailAddress;
use super::validation::{
    FieldResult, FieldViolation, PayloadReader, UnknownFieldPolicy, ValidationErrors, Violations,
    within,
};

/// JSON field carrying the email address.
pub const EMAIL_FIELD: &str = "email";
/// JSON field carrying the password.
pub const PASSWORD_FIELD: &str = "password";
/// JSON field carrying the first name.
pub const FIRST_NAME_FIELD: &str = "first_name";
/// JSON field carrying the last name.
pub const LAST_NAME_FIELD: &str = "last_name";

/// Registration request body.
///
/// ## Invariants
/// - `email` is a valid address.
/// - `password` has at least [`super::PASSWORD_MIN`] characters.
/// - `first_name` and `last_name` are non-empty.
///
/// The password is held only until an external collaborator hashes it; this
/// shape is never serialised.
///
/// # Examples
/// ```
/// use capabilities::domain::UserRegistration;
///
/// let registration =
///     UserRegistration::try_from_parts("a@b.com", "longenough", "A", "B").unwrap();
/// assert_eq!(registration.first_name().as_ref(), "A");
///
/// let err = UserRegistration::try_from_parts("a@b.com", "short", "", "B").unwrap_err();
/// assert!(err.contains("password"));
/// assert!(err.contains("first_name"));
/// ```
#[derive(Debug, Clone)]
pub struct UserRegistration {
    email: EmailAddress,
    password: Password,
    first_name: PersonName,
    last_name: PersonName,
}

impl UserRegistration {
    /// Validate string inputs, reporting every violation.
    pub fn try_from_parts(
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Self, ValidationErrors> {
        Self::assemble(
            Ok(email),
            Ok(password),
            Ok(first_name),
            Ok(last_name),
            Vec::new(),
        )
    }

    fn assemble(
        email: FieldResult<&str>,
        password: FieldResult<&str>,
        first_name: FieldResult<&str>,
        last_name: FieldResult<&str>,
        undeclared: Vec<FieldViolation>,
    ) -> Result<Self, ValidationErrors> {
        let email = email.and_then(|raw| within(EMAIL_FIELD, EmailAddress::new(raw)));
        let password =
            password.and_then(|raw| within(PASSWORD_FIELD, Password::for_registration(raw)));
        let first_name =
            first_name.and_then(|raw| within(FIRST_NAME_FIELD, PersonName::new(raw)));
        let last_name = last_name.and_then(|raw| within(LAST_NAME_FIELD, PersonName::new(raw)));

        let mut violations = Violations::default();
        violations
            .check(&email)
            .check(&password)
            .check(&first_name)
            .check(&last_name)
            .extend(undeclared);
        violations.into_result()?;

        Ok(Self {
            email: email?,
            password: password?,
            first_name: first_name?,
            last_name: last_name?,
        })
    }

    /// Address the account is registered under.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Password to hand to the hashing collaborator.
    pub fn password(&self) -> &Password {
        &self.password
    }

    /// Given name.
    pub fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    /// Family name.
    pub fn last_name(&self) -> &PersonName {
        &self.last_name
    }
}

impl FromPayload for UserRegistration {
    const FIELDS: &'static [&'static str] =
        &[EMAIL_FIELD, PASSWORD_FIELD, FIRST_NAME_FIELD, LAST_NAME_FIELD];

    fn from_payload(payload: &Value, policy: UnknownFieldPolicy) -> Result<Self, ValidationErrors> {
        let reader = PayloadReader::new(payload)?;
        Self::assemble(
            reader.string(EMAIL_FIELD),
            reader.string(PASSWORD_FIELD),
            reader.string(FIRST_NAME_FIELD),
            reader.string(LAST_NAME_FIELD),
            reader.undeclared(Self::FIELDS, policy),
        )
    }
}

/// Login request body.
///
/// ## Invariants
/// - `email` is a valid address.
/// - `password` is any string, including an empty one; the authentication
///   collaborator decides whether it matches.
#[derive(Debug, Clone)]
pub struct UserLogin {
    email: EmailAddress,
    password: Password,
}

impl UserLogin {
    /// Validate string inputs, reporting every violation.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, ValidationErrors> {
        Self::assemble(Ok(email), Ok(password), Vec::new())
    }

    fn assemble(
        email: FieldResult<&str>,
        password: FieldResult<&str>,
        undeclared: Vec<FieldViolation>,
    ) -> Result<Self, ValidationErrors> {
        let email = email.and_then(|raw| within(EMAIL_FIELD, EmailAddress::new(raw)));
        let password = password.map(|raw| Password::new(raw));

        let mut violations = Violations::default();
        violations.check(&email).check(&password).extend(undeclared);
        violations.into_result()?;

        Ok(Self {
            email: email?,
            password: password?,
        })
    }

    /// Address to authenticate.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Password to verify.
    pub fn password(&self) -> &Password {
        &self.password
    }
}

impl FromPayload for UserLogin {
    const FIELDS: &'static [&'static str] = &[EMAIL_FIELD, PASSWORD_FIELD];

    fn from_payload(payload: &Value, policy: UnknownFieldPolicy) -> Result<Self, ValidationErrors> {
        let reader = PayloadReader::new(payload)?;
        Self::assemble(
            reader.string(EMAIL_FIELD),
            reader.string(PASSWORD_FIELD),
            reader.undeclared(Self::FIELDS, policy),
        )
    }
}

/// User details returned to clients.
///
/// ## Invariants
/// - Carries no password or other secret. There is no field to hold one.
/// - `created_at` is passed through as supplied; it is expected to be an
///   ISO-8601 timestamp agreed with the persistence collaborator.
///
/// # Examples
/// ```
/// use capabilities::domain::UserResponse;
///
/// let user = UserResponse::new("a@b.com", "A", "B", "2024-01-01T00:00:00Z");
/// let json = serde_json::to_value(&user).unwrap();
/// assert!(json.get("password").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UserResponse {
    #[schema(example = "ada@example.com")]
    email: String,
    #[schema(example = "Ada")]
    first_name: String,
    #[schema(example = "Lovelace")]
    last_name: String,
    #[schema(example = "2024-01-01T00:00:00Z")]
    created_at: String,
}

impl UserResponse {
    /// Build a response from trusted stored values.
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            created_at: created_at.into(),
        }
    }

    /// Project a validated registration, dropping the password.
    ///
    /// `created_at` is rendered as RFC 3339 with second precision in UTC.
    pub fn from_registration(registration: &UserRegistration, created_at: DateTime<Utc>) -> Self {
        Self::new(
            registration.email().as_ref(),
            registration.first_name().as_ref(),
            registration.last_name().as_ref(),
            created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        )
    }

    /// Email address of the user.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Given name.
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Family name.
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    /// Creation timestamp as stored.
    pub fn created_at(&self) -> &str {
        self.created_at.as_str()
    }
}
