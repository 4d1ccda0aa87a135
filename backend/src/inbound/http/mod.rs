//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod error;
pub mod health;
pub mod products;
pub mod response;
pub mod schemas;
pub mod state;

pub use error::ApiResult;
pub use response::StatusPolicy;

use crate::domain::Error;

/// JSON extractor configuration shared by every route.
///
/// Malformed bodies are answered with a 400 JSON [`Error`] instead of
/// actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("invalid JSON body: {err}")).into()
    })
}
