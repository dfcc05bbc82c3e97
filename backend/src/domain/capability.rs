//! Capability registration contract.
//!
//! The request body declares no fields. The registrant is whoever the
//! authentication collaborator says is calling, so a caller can never
//! register a capability under someone else's identity by editing the body.

use serde_json::Value;

use super::contract::FromPayload;
use super::email::EmailAddress;
use super::validation::{PayloadReader, UnknownFieldPolicy, ValidationErrors, Violations};

/// Capability registration request body.
///
/// Accepts `{}`. Non-object payloads are rejected. Under
/// [`UnknownFieldPolicy::Strict`] every key, including an `email`, is
/// reported as unknown; under [`UnknownFieldPolicy::Lenient`] keys are
/// ignored and never read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct CapabilityRegistration;

impl CapabilityRegistration {
    /// The empty body.
    pub fn new() -> Self {
        Self
    }
}

impl FromPayload for CapabilityRegistration {
    const FIELDS: &'static [&'static str] = &[];

    fn from_payload(payload: &Value, policy: UnknownFieldPolicy) -> Result<Self, ValidationErrors> {
        let reader = PayloadReader::new(payload)?;
        let mut violations = Violations::default();
        violations.extend(reader.undeclared(Self::FIELDS, policy));
        violations.into_result()?;
        Ok(Self)
    }
}

/// Identity vouched for by the external authentication collaborator.
///
/// Never constructed from request body content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthenticatedUser {
    email: EmailAddress,
}

impl AuthenticatedUser {
    /// Wrap an identity established by the authentication collaborator.
    pub fn new(email: EmailAddress) -> Self {
        Self { email }
    }

    /// Authenticated email address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}

/// A capability registration bound to its authenticated registrant.
///
/// The only way to learn who is registering is through the identity passed to
/// [`CapabilityRegistrationRequest::new`].
///
/// # Examples
/// ```
/// use capabilities::domain::{
///     AuthenticatedUser, CapabilityRegistration, CapabilityRegistrationRequest, EmailAddress,
///     FromPayload, UnknownFieldPolicy,
/// };
/// use serde_json::json;
///
/// let identity = AuthenticatedUser::new(EmailAddress::new("ada@example.com").unwrap());
/// let body = CapabilityRegistration::from_payload(
///     &json!({ "email": "mallory@example.com" }),
///     UnknownFieldPolicy::Lenient,
/// )
/// .unwrap();
/// let request = CapabilityRegistrationRequest::new(identity, body);
/// assert_eq!(request.registrant().as_ref(), "ada@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityRegistrationRequest {
    identity: AuthenticatedUser,
    body: CapabilityRegistration,
}

impl CapabilityRegistrationRequest {
    /// Combine the authenticated identity with a validated body.
    pub fn new(identity: AuthenticatedUser, body: CapabilityRegistration) -> Self {
        Self { identity, body }
    }

    /// Email of the authenticated registrant.
    pub fn registrant(&self) -> &EmailAddress {
        self.identity.email()
    }

    /// Authenticated identity.
    pub fn identity(&self) -> &AuthenticatedUser {
        &self.identity
    }

    /// Validated request body.
    pub fn body(&self) -> &CapabilityRegistration {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for capability registration.
    use super::*;
    use crate::domain::{ROOT_PATH, ViolationKind};
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn identity() -> AuthenticatedUser {
        AuthenticatedUser::new(EmailAddress::new("ada@example.com").expect("valid fixture"))
    }

    #[rstest]
    #[case(UnknownFieldPolicy::Strict)]
    #[case(UnknownFieldPolicy::Lenient)]
    fn accepts_empty_object(#[case] policy: UnknownFieldPolicy) {
        let body = CapabilityRegistration::from_payload(&json!({}), policy);
        assert_eq!(body, Ok(CapabilityRegistration::new()));
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!([]))]
    #[case(json!("{}"))]
    #[case(json!(42))]
    #[case(json!(true))]
    fn rejects_non_object_payloads(#[case] payload: Value) {
        let err = CapabilityRegistration::from_payload(&payload, UnknownFieldPolicy::Lenient)
            .expect_err("non-object payload must fail");
        assert_eq!(err.len(), 1);
        let violation = &err.violations()[0];
        assert_eq!(violation.field(), ROOT_PATH);
        assert_eq!(
            violation.kind(),
            ViolationKind::TypeMismatch { expected: "object" }
        );
    }

    #[rstest]
    fn strict_policy_reports_every_extra_field() {
        let err = CapabilityRegistration::from_payload(
            &json!({ "email": "mallory@example.com", "note": 1 }),
            UnknownFieldPolicy::Strict,
        )
        .expect_err("strict policy rejects extras");
        let fields: Vec<&str> = err.fields().collect();
        assert_eq!(fields, vec!["email", "note"]);
        assert!(
            err.violations()
                .iter()
                .all(|violation| violation.kind() == ViolationKind::UnknownField)
        );
    }

    #[rstest]
    fn body_identity_never_reaches_the_request(identity: AuthenticatedUser) {
        let body = CapabilityRegistration::from_payload(
            &json!({ "email": "mallory@example.com" }),
            UnknownFieldPolicy::Lenient,
        )
        .expect("lenient policy ignores extras");
        let request = CapabilityRegistrationRequest::new(identity.clone(), body);
        assert_eq!(request.registrant().as_ref(), "ada@example.com");
        assert_eq!(request.identity(), &identity);
    }
}
