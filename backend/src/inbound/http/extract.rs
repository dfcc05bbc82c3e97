//! Extractors that hand handlers validated contracts instead of raw JSON.
//!
//! ```text
//! async fn register(Validated(body): Validated<UserRegistration>) -> ... { }
//! async fn add(identity: AuthenticatedUser, Validated(body): Validated<CapabilityRegistration>)
//! ```
//!
//! The unknown-field policy is read from `web::Data<UnknownFieldPolicy>` when
//! the application registers one; otherwise the lenient default applies.

use actix_web::{
    FromRequest, HttpMessage, HttpRequest, dev::Payload, error::JsonPayloadError, web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{
    AuthenticatedUser, Error, FromPayload, ROOT_PATH, UnknownFieldPolicy, ValidationErrors,
    ViolationKind,
};

/// A request body validated into contract `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated<T>(pub T);

impl<T> Validated<T> {
    /// Unwrap the validated contract.
    pub fn into_inner(self) -> T {
        self.0
    }
}

fn configured_policy(req: &HttpRequest) -> UnknownFieldPolicy {
    req.app_data::<web::Data<UnknownFieldPolicy>>()
        .map(|policy| *policy.get_ref())
        .unwrap_or_default()
}

/// Map a body that never reached contract validation.
///
/// Only a parse failure is a violation at [`ROOT_PATH`]; transport problems
/// keep their own codes.
fn unreadable_body(err: &JsonPayloadError) -> Error {
    debug!(error = %err, "request body rejected before validation");
    match err {
        JsonPayloadError::OverflowKnownLength { limit, .. }
        | JsonPayloadError::Overflow { limit } => {
            Error::payload_too_large(format!("request body exceeds {limit} bytes"))
        }
        JsonPayloadError::ContentType => {
            Error::invalid_request("content type must be application/json")
        }
        JsonPayloadError::Deserialize(_) => Error::from(ValidationErrors::single(
            ROOT_PATH,
            ViolationKind::TypeMismatch { expected: "object" },
        )),
        _ => Error::invalid_request("request body could not be read"),
    }
}

impl<T> FromRequest for Validated<T>
where
    T: FromPayload + 'static,
{
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let policy = configured_policy(req);
        let json = web::Json::<Value>::from_request(req, payload);
        Box::pin(async move {
            let body = json
                .await
                .map_err(|err| match err.as_error::<JsonPayloadError>() {
                    Some(payload_error) => unreadable_body(payload_error),
                    None => Error::from(err),
                })?
                .into_inner();
            T::from_payload(&body, policy).map(Validated).map_err(|errors| {
                debug!(
                    violations = errors.len(),
                    policy = %policy,
                    "request payload rejected"
                );
                Error::from(errors)
            })
        })
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    /// Read the identity the authentication middleware stored in the request
    /// extensions. The request body is never consulted.
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let identity = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(identity.ok_or_else(|| {
            warn!(path = %req.path(), "no authenticated identity on request");
            Error::unauthorized("login required")
        }))
    }
}
