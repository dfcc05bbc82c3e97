//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn contract failures into consistent JSON responses and
//! status codes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{debug, error};

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        Error::internal("Internal server error")
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(redact_if_internal(self))
    }
}

/// Promote an Actix extractor failure that has no dedicated mapping.
///
/// Client errors keep their category; anything else becomes a redacted
/// internal error.
impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        let status = err.as_response_error().status_code();
        if status == StatusCode::UNAUTHORIZED {
            debug!(error = %err, "actix extractor rejected credentials");
            Error::unauthorized("login required")
        } else if status == StatusCode::PAYLOAD_TOO_LARGE {
            debug!(error = %err, "actix extractor rejected body size");
            Error::payload_too_large("request body is too large")
        } else if status.is_client_error() {
            debug!(error = %err, "actix extractor rejected request");
            Error::invalid_request("request could not be processed")
        } else {
            // Do not leak implementation details to clients.
            error!(error = %err, "actix error promoted to domain error");
            Error::internal("Internal server error")
        }
    }
}
