//! Secret and personal-name value types used by the user contracts.

use std::fmt;

use zeroize::Zeroizing;

use super::validation::ViolationKind;

/// Minimum password length accepted at registration, in characters.
pub const PASSWORD_MIN: usize = 8;

/// Caller-supplied password.
///
/// The buffer is wiped on drop and never appears in `Debug` output. The type
/// implements neither `Serialize` nor `Display`, and has no `PartialEq`:
/// verification belongs to the hashing collaborator.
///
/// ```compile_fail
/// use capabilities::domain::Password;
///
/// let same = Password::new("hunter22") == Password::new("hunter22");
/// ```
#[derive(Clone)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Wrap a password without length rules, as used for login.
    pub fn new(password: impl Into<String>) -> Self {
        Self(Zeroizing::new(password.into()))
    }

    /// Wrap a password that must be at least [`PASSWORD_MIN`] characters.
    pub fn for_registration(password: impl Into<String>) -> Result<Self, ViolationKind> {
        let password = Zeroizing::new(password.into());
        if password.chars().count() < PASSWORD_MIN {
            return Err(ViolationKind::TooShort { min: PASSWORD_MIN });
        }
        Ok(Self(password))
    }

    /// Expose the secret for hashing or comparison.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// First or last name of a person.
///
/// ## Invariants
/// - Contains at least one character. Content is otherwise kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    /// Validate and construct a [`PersonName`].
    pub fn new(name: impl Into<String>) -> Result<Self, ViolationKind> {
        let name = name.into();
        if name.is_empty() {
            return Err(ViolationKind::Empty);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<PersonName> for String {
    fn from(value: PersonName) -> Self {
        value.0
    }
}
