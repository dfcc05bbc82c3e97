//! Field-level validation shared by every request contract.
//!
//! Constructors never stop at the first problem. Each field is checked
//! independently and every violation is gathered into a single
//! [`ValidationErrors`] so callers can report all of them in one response.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Value};

/// Field path used when the payload itself, rather than one of its fields,
/// is malformed.
pub const ROOT_PATH: &str = "$";

/// Reason a single field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// The field was absent or `null`.
    MissingField,
    /// The field was present with the wrong JSON type.
    TypeMismatch {
        /// JSON type the contract expects, e.g. `string`.
        expected: &'static str,
    },
    /// The value is shorter than the declared minimum length.
    TooShort {
        /// Minimum number of characters.
        min: usize,
    },
    /// The value is not a syntactically valid email address.
    InvalidEmail,
    /// The value is an empty string.
    Empty,
    /// The payload carries a field the contract does not declare.
    UnknownField,
}

impl ViolationKind {
    /// Stable machine-readable code for the violation.
    pub fn code(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::TypeMismatch { .. } => "type_mismatch",
            Self::TooShort { .. } => "too_short",
            Self::InvalidEmail => "invalid_email",
            Self::Empty => "empty",
            Self::UnknownField => "unknown_field",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField => write!(f, "field required"),
            Self::TypeMismatch { expected } => write!(f, "expected {expected}"),
            Self::TooShort { min } => write!(f, "min length {min}"),
            Self::InvalidEmail => write!(f, "invalid format"),
            Self::Empty => write!(f, "must not be empty"),
            Self::UnknownField => write!(f, "unknown field"),
        }
    }
}

/// A violation bound to the path of the offending field.
///
/// Serialises as `{"field": ..., "code": ..., "message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "FieldViolationDto")]
pub struct FieldViolation {
    field: String,
    kind: ViolationKind,
}

impl FieldViolation {
    /// Bind `kind` to `field`.
    pub fn new(field: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }

    /// JSON field name, or [`ROOT_PATH`] for the payload itself.
    pub fn field(&self) -> &str {
        self.field.as_str()
    }

    /// Why the field was rejected.
    pub fn kind(&self) -> ViolationKind {
        self.kind
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Human-readable reason.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind)
    }
}

#[derive(Serialize)]
struct FieldViolationDto {
    field: String,
    code: &'static str,
    message: String,
}

impl From<FieldViolation> for FieldViolationDto {
    fn from(value: FieldViolation) -> Self {
        Self {
            code: value.code(),
            message: value.message(),
            field: value.field,
        }
    }
}

/// Every violation found while constructing a contract.
///
/// ## Invariants
/// - Holds at least one violation.
/// - Violations keep the order in which fields were checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    /// Wrap a single violation.
    pub fn single(field: impl Into<String>, kind: ViolationKind) -> Self {
        Self(vec![FieldViolation::new(field, kind)])
    }

    /// Collect violations, returning `None` when there are none.
    pub fn from_violations(violations: Vec<FieldViolation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self(violations))
        }
    }

    /// All violations in check order.
    pub fn violations(&self) -> &[FieldViolation] {
        self.0.as_slice()
    }

    /// Names of the offending fields in check order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(FieldViolation::field)
    }

    /// Whether `field` has at least one violation.
    pub fn contains(&self, field: &str) -> bool {
        self.fields().any(|name| name == field)
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with [`Self::len`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the error, yielding the violations.
    pub fn into_violations(self) -> Vec<FieldViolation> {
        self.0
    }
}

impl From<FieldViolation> for ValidationErrors {
    fn from(value: FieldViolation) -> Self {
        Self(vec![value])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed")?;
        for (index, violation) in self.0.iter().enumerate() {
            let separator = if index == 0 { ": " } else { "; " };
            write!(f, "{separator}{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// How to treat payload fields a contract does not declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownFieldPolicy {
    /// Report every undeclared field as an [`ViolationKind::UnknownField`].
    Strict,
    /// Ignore undeclared fields.
    #[default]
    Lenient,
}

impl UnknownFieldPolicy {
    /// Configuration spelling of the policy.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }
}

impl fmt::Display for UnknownFieldPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognised policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field policy must be `strict` or `lenient`, got `{0}`")]
pub struct ParseUnknownFieldPolicyError(String);

impl FromStr for UnknownFieldPolicy {
    type Err = ParseUnknownFieldPolicyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            _ => Err(ParseUnknownFieldPolicyError(value.to_owned())),
        }
    }
}

/// Result of checking one field.
pub(crate) type FieldResult<T> = Result<T, FieldViolation>;

/// Attach `field` to a constraint outcome.
pub(crate) fn within<T>(field: &str, result: Result<T, ViolationKind>) -> FieldResult<T> {
    result.map_err(|kind| FieldViolation::new(field, kind))
}

/// Read-only view over a JSON object payload.
pub(crate) struct PayloadReader<'a> {
    object: &'a Map<String, Value>,
}

impl<'a> PayloadReader<'a> {
    /// Accept only JSON objects; anything else fails at [`ROOT_PATH`].
    pub(crate) fn new(payload: &'a Value) -> Result<Self, ValidationErrors> {
        match payload {
            Value::Object(object) => Ok(Self { object }),
            _ => Err(ValidationErrors::single(
                ROOT_PATH,
                ViolationKind::TypeMismatch { expected: "object" },
            )),
        }
    }

    /// Read a required string field. `null` counts as missing.
    pub(crate) fn string(&self, field: &str) -> FieldResult<&'a str> {
        match self.object.get(field) {
            None | Some(Value::Null) => Err(FieldViolation::new(field, ViolationKind::MissingField)),
            Some(Value::String(value)) => Ok(value.as_str()),
            Some(_) => Err(FieldViolation::new(
                field,
                ViolationKind::TypeMismatch { expected: "string" },
            )),
        }
    }

    /// Violations for fields outside `declared`, honouring `policy`.
    ///
    /// Unknown fields are reported in lexicographic order.
    pub(crate) fn undeclared(
        &self,
        declared: &[&str],
        policy: UnknownFieldPolicy,
    ) -> Vec<FieldViolation> {
        if policy == UnknownFieldPolicy::Lenient {
            return Vec::new();
        }
        let mut unknown: Vec<&str> = self
            .object
            .keys()
            .map(String::as_str)
            .filter(|key| !declared.contains(key))
            .collect();
        unknown.sort_unstable();
        unknown
            .into_iter()
            .map(|key| FieldViolation::new(key, ViolationKind::UnknownField))
            .collect()
    }
}

/// Accumulates the failures of independently checked fields.
#[derive(Debug, Default)]
pub(crate) struct Violations(Vec<FieldViolation>);

impl Violations {
    /// Record the violation carried by `result`, if any.
    pub(crate) fn check<T>(&mut self, result: &FieldResult<T>) -> &mut Self {
        if let Err(violation) = result {
            self.0.push(violation.clone());
        }
        self
    }

    /// Record additional violations.
    pub(crate) fn extend(&mut self, violations: Vec<FieldViolation>) -> &mut Self {
        self.0.extend(violations);
        self
    }

    /// Fail with every recorded violation, or succeed when none were seen.
    pub(crate) fn into_result(self) -> Result<(), ValidationErrors> {
        match ValidationErrors::from_violations(self.0) {
            Some(errors) => Err(errors),
            None => Ok(()),
        }
    }
}
