//! Email address value type.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::validation::ViolationKind;

/// Maximum length of a whole address.
pub const EMAIL_MAX: usize = 254;
/// Maximum length of the part before `@`.
pub const EMAIL_LOCAL_MAX: usize = 64;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Dot-atom local part; domain of two or more letter-digit-hyphen
        // labels. Letters and digits include non-ASCII ones.
        let pattern = concat!(
            r"^[\p{L}\p{M}\p{N}!#$%&'*+/=?^_`{|}~-]+(?:\.[\p{L}\p{M}\p{N}!#$%&'*+/=?^_`{|}~-]+)*",
            r"@(?:[\p{L}\p{N}](?:[\p{L}\p{M}\p{N}-]{0,61}[\p{L}\p{M}\p{N}])?\.)+",
            r"[\p{L}\p{N}](?:[\p{L}\p{M}\p{N}-]{0,61}[\p{L}\p{M}\p{N}])?$",
        );
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

fn has_numeric_tld(email: &str) -> bool {
    email
        .rsplit('.')
        .next()
        .is_some_and(|label| label.chars().all(|c| c.is_ascii_digit()))
}

/// Syntactically valid email address, kept exactly as supplied.
///
/// ## Invariants
/// - Matches the dot-atom `local@domain` grammar with at least one dot in the
///   domain. Internationalised letters are allowed in both parts.
/// - The last domain label is not all digits, so IP-like hosts are refused.
/// - At most [`EMAIL_MAX`] characters overall and [`EMAIL_LOCAL_MAX`] before
///   the `@`.
///
/// # Examples
/// ```
/// use capabilities::domain::EmailAddress;
///
/// let email = EmailAddress::new("ada@example.com").unwrap();
/// assert_eq!(email.as_ref(), "ada@example.com");
/// assert!(EmailAddress::new("not-an-email").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    pub fn new(email: impl Into<String>) -> Result<Self, ViolationKind> {
        Self::from_owned(email.into())
    }

    fn from_owned(email: String) -> Result<Self, ViolationKind> {
        if email.is_empty() {
            return Err(ViolationKind::Empty);
        }
        if email.chars().count() > EMAIL_MAX {
            return Err(ViolationKind::InvalidEmail);
        }
        let local_len = email.split('@').next().map_or(0, |local| local.chars().count());
        if local_len > EMAIL_LOCAL_MAX {
            return Err(ViolationKind::InvalidEmail);
        }
        if !email_regex().is_match(&email) || has_numeric_tld(&email) {
            return Err(ViolationKind::InvalidEmail);
        }
        Ok(Self(email))
    }

    /// Domain part after the `@`.
    pub fn domain(&self) -> &str {
        self.0.rsplit('@').next().unwrap_or_default()
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ViolationKind;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}
