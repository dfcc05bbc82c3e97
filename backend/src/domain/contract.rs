//! Common entry point for request contracts.

use serde_json::Value;

use super::validation::{UnknownFieldPolicy, ValidationErrors};

/// A request body shape that can be validated from a parsed JSON payload.
///
/// Implementations check every declared field and report all violations
/// together. Construction is pure: it reads only `payload`.
///
/// # Examples
/// ```
/// use capabilities::domain::{FromPayload, UnknownFieldPolicy, UserLogin};
/// use serde_json::json;
///
/// let payload = json!({ "email": "ada@example.com", "password": "x" });
/// let login = UserLogin::from_payload(&payload, UnknownFieldPolicy::Lenient).unwrap();
/// assert_eq!(login.email().as_ref(), "ada@example.com");
/// ```
pub trait FromPayload: Sized {
    /// JSON field names the shape declares.
    const FIELDS: &'static [&'static str];

    /// Validate `payload` and construct the shape.
    fn from_payload(payload: &Value, policy: UnknownFieldPolicy) -> Result<Self, ValidationErrors>;
}
