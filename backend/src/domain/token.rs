//! Access token response issued after login or registration.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::user::UserResponse;

/// Token type used when none is given.
pub const DEFAULT_TOKEN_TYPE: &str = "bearer";

fn default_token_type() -> String {
    DEFAULT_TOKEN_TYPE.to_owned()
}

/// Access token plus the user it was issued for.
///
/// The token itself is minted by an external signing collaborator; this type
/// only shapes the response.
///
/// # Examples
/// ```
/// use capabilities::domain::{TokenResponse, UserResponse};
///
/// let user = UserResponse::new("a@b.com", "A", "B", "2024-01-01T00:00:00Z");
/// let token = TokenResponse::bearer("xyz", user);
/// let json = serde_json::to_value(&token).unwrap();
/// assert_eq!(json["token_type"], "bearer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct TokenResponse {
    #[schema(example = "eyJhbGciOiJIUzI1NiJ9.e30.signature")]
    access_token: String,
    #[serde(default = "default_token_type")]
    #[schema(default = "bearer", example = "bearer")]
    token_type: String,
    user: UserResponse,
}

impl TokenResponse {
    /// Build a response with an explicit token type.
    pub fn new(
        access_token: impl Into<String>,
        token_type: impl Into<String>,
        user: UserResponse,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: token_type.into(),
            user,
        }
    }

    /// Build a response with the default [`DEFAULT_TOKEN_TYPE`].
    pub fn bearer(access_token: impl Into<String>, user: UserResponse) -> Self {
        Self::new(access_token, default_token_type(), user)
    }

    /// Replace the token type.
    #[must_use]
    pub fn with_token_type(mut self, token_type: impl Into<String>) -> Self {
        self.token_type = token_type.into();
        self
    }

    /// Opaque access token.
    pub fn access_token(&self) -> &str {
        self.access_token.as_str()
    }

    /// Token type, `bearer` unless overridden.
    pub fn token_type(&self) -> &str {
        self.token_type.as_str()
    }

    /// The user the token was issued for.
    pub fn user(&self) -> &UserResponse {
        &self.user
    }
}
