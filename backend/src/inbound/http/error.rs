//! Actix rendering of domain [`Error`]s.
//!
//! | code                  | status | extra headers              |
//! |-----------------------|--------|----------------------------|
//! | `invalid_request`     | 400    | `trace-id`                 |
//! | `service_unavailable` | 503    | `trace-id`, `Retry-After`  |
//! | `internal_error`      | 500    | `trace-id`                 |
//!
//! Bodies are always [`Error::redacted`]: the full message was already
//! logged where the store failure was mapped, and the `traceId` in the body
//! links the two.

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, ResponseError};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Seconds a client should wait before retrying during a store outage.
pub const RETRY_AFTER_SECS: u32 = 5;

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.code() {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            response.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        if self.code() == ErrorCode::ServiceUnavailable {
            response.insert_header((header::RETRY_AFTER, RETRY_AFTER_SECS));
        }
        response.json(self.redacted())
    }
}
