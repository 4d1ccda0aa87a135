//! Domain-level error type for infrastructure and request failures.
//!
//! Business-rule violations never use this type: they travel as
//! [`ValidationError`](crate::domain::ValidationError)s inside a
//! [`ResponseEnvelope`](crate::domain::ResponseEnvelope). `Error` covers the
//! faults an envelope cannot describe, such as an unreachable store or a
//! request body that cannot be decoded. Inbound adapters map it to protocol
//! responses.

use serde::Serialize;

use super::TraceId;

const UNAVAILABLE_MESSAGE: &str = "Service temporarily unavailable";
const INTERNAL_MESSAGE: &str = "Internal server error";

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request could not be decoded.
    InvalidRequest,
    /// A backing service (the document store) is unreachable.
    ServiceUnavailable,
    /// An unexpected error occurred while serving the request.
    InternalError,
}

/// Error payload returned to adapters.
///
/// The trace identifier in scope at construction time is captured so the
/// response body can be correlated with server logs.
///
/// # Examples
/// ```
/// use product_service::domain::{Error, ErrorCode};
///
/// let err = Error::service_unavailable("store offline");
/// assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
/// assert_eq!(err.message(), "store offline");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
}

impl Error {
    /// Create an error, capturing the ambient trace identifier.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Correlation identifier, when one was in scope.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Replace the correlation identifier.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Client-facing copy of this error.
    ///
    /// Store outages and internal faults carry driver output in their
    /// message, so both are replaced with a fixed sentence. Decoding errors
    /// describe the client's own input and pass through. Code and trace id
    /// are always kept.
    ///
    /// # Examples
    /// ```
    /// use product_service::domain::Error;
    ///
    /// let err = Error::service_unavailable("server selection timeout: db0:27017");
    /// assert_eq!(err.redacted().message(), "Service temporarily unavailable");
    /// ```
    #[must_use]
    pub fn redacted(&self) -> Self {
        let message = match self.code {
            ErrorCode::InvalidRequest => return self.clone(),
            ErrorCode::ServiceUnavailable => UNAVAILABLE_MESSAGE,
            ErrorCode::InternalError => INTERNAL_MESSAGE,
        };
        Self {
            code: self.code,
            message: message.to_owned(),
            trace_id: self.trace_id.clone(),
        }
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests;
