//! Uniform result wrapper returned by every product use-case.
//!
//! An envelope carries an optional payload, an ordered list of field-level
//! validation errors, and a status. Only `data` and `errors` are part of the
//! JSON contract:
//!
//! ```json
//! {"data": null, "errors": [{"field": "Name", "errorMessage": "..."}]}
//! ```
//!
//! Adding a single error forces the status to [`ResponseStatus::BAD_REQUEST`];
//! bulk additions through [`ResponseEnvelope::add_errors`] leave it alone.

use serde::{Deserialize, Serialize};

/// Numeric status attached to an envelope.
///
/// The value follows HTTP status semantics but is not tied to any transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResponseStatus(u16);

impl ResponseStatus {
    pub const OK: Self = Self(200);
    pub const CREATED: Self = Self(201);
    pub const BAD_REQUEST: Self = Self(400);
    pub const NOT_FOUND: Self = Self(404);

    /// Wrap an arbitrary status value.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// The numeric status.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }
}

impl Default for ResponseStatus {
    fn default() -> Self {
        Self::OK
    }
}

/// Field-scoped description of a rejected input or missing resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    field: String,
    error_message: String,
}

impl ValidationError {
    /// Describe a problem with `field`.
    pub fn new(field: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            error_message: error_message.into(),
        }
    }

    /// Name of the offending input field.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Human-readable description.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }
}

/// Payload, validation errors, and status for one use-case invocation.
///
/// # Examples
/// ```
/// use product_service::domain::{ResponseEnvelope, ResponseStatus, ValidationError};
///
/// let mut envelope = ResponseEnvelope::<u32>::new();
/// envelope.add_error(ValidationError::new("Price", "must be positive"));
/// assert!(envelope.has_error());
/// assert_eq!(envelope.status(), ResponseStatus::BAD_REQUEST);
/// assert!(envelope.data().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseEnvelope<T> {
    data: Option<T>,
    errors: Vec<ValidationError>,
    #[serde(skip)]
    status: ResponseStatus,
}

impl<T> Default for ResponseEnvelope<T> {
    fn default() -> Self {
        Self {
            data: None,
            errors: Vec::new(),
            status: ResponseStatus::OK,
        }
    }
}

impl<T> ResponseEnvelope<T> {
    /// Empty successful envelope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Successful envelope carrying `data`.
    #[must_use]
    pub fn with_data(data: T) -> Self {
        let mut envelope = Self::new();
        envelope.add_data(data);
        envelope
    }

    /// Envelope holding a single error.
    #[must_use]
    pub fn failed(error: ValidationError) -> Self {
        let mut envelope = Self::new();
        envelope.add_error(error);
        envelope
    }

    /// Payload, when one was set.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Consume the envelope and return its payload.
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Errors in insertion order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Whether any error was recorded.
    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Current status.
    pub fn status(&self) -> ResponseStatus {
        self.status
    }

    /// Override the status.
    pub fn set_status(&mut self, status: ResponseStatus) {
        self.status = status;
    }

    /// Set the payload without touching the status.
    pub fn add_data(&mut self, data: T) {
        self.data = Some(data);
    }

    /// Set the payload and the status.
    pub fn add_data_with_status(&mut self, data: T, status: ResponseStatus) {
        self.add_data(data);
        self.set_status(status);
    }

    /// Append an error and force the status to bad request.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.set_status(ResponseStatus::BAD_REQUEST);
    }

    /// Append an error with an explicit status.
    pub fn add_error_with_status(&mut self, error: ValidationError, status: ResponseStatus) {
        self.add_error(error);
        self.set_status(status);
    }

    /// Append several errors. The status is left unchanged.
    pub fn add_errors<I>(&mut self, errors: I)
    where
        I: IntoIterator<Item = ValidationError>,
    {
        self.errors.extend(errors);
    }

    /// Append several errors and set the status.
    pub fn add_errors_with_status<I>(&mut self, errors: I, status: ResponseStatus)
    where
        I: IntoIterator<Item = ValidationError>,
    {
        self.add_errors(errors);
        self.set_status(status);
    }

    /// Append errors decoded from a JSON array of `{field, errorMessage}`.
    ///
    /// Nothing is appended when decoding fails. The status is left unchanged.
    ///
    /// # Errors
    /// Returns the decoding error for malformed input.
    pub fn add_errors_from_json(&mut self, errors: &str) -> Result<(), serde_json::Error> {
        let decoded: Vec<ValidationError> = serde_json::from_str(errors)?;
        self.add_errors(decoded);
        Ok(())
    }
}
