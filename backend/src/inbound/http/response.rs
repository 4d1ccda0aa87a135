//! Envelope rendering.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::Serialize;

use crate::domain::{ResponseEnvelope, ResponseStatus};

/// How the envelope's status reaches the transport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusPolicy {
    /// The envelope status becomes the HTTP status (200, 201, 400).
    #[default]
    Envelope,
    /// Always answer 200; clients inspect `errors` to detect failure.
    AlwaysOk,
}

impl StatusPolicy {
    /// HTTP status for an envelope carrying `status`.
    pub fn status_for(self, status: ResponseStatus) -> StatusCode {
        match self {
            Self::AlwaysOk => StatusCode::OK,
            Self::Envelope => StatusCode::from_u16(status.as_u16())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }

    /// Serialise `envelope` as the JSON response body.
    pub fn respond<T: Serialize>(self, envelope: &ResponseEnvelope<T>) -> HttpResponse {
        HttpResponse::build(self.status_for(envelope.status())).json(envelope)
    }
}
