//! Service settings loaded via OrthoConfig.
//!
//! Values come from `PRODUCTS_*` environment variables, CLI flags, or a
//! configuration file, with built-in defaults for local development.

use std::net::{AddrParseError, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::inbound::http::StatusPolicy;
use crate::outbound::persistence::StoreConfig;

const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE: &str = "mongo";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Settings controlling the store connection and the HTTP listener.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PRODUCTS")]
pub struct AppSettings {
    /// MongoDB connection string.
    pub mongo_uri: Option<String>,
    /// Database holding the `Products` collection.
    pub database: Option<String>,
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Answer every product request with HTTP 200 and carry the outcome only
    /// in the envelope.
    #[ortho_config(default = false)]
    pub legacy_status_ok: bool,
}

impl AppSettings {
    /// Return the configured connection string, falling back to the default.
    pub fn mongo_uri(&self) -> &str {
        self.mongo_uri.as_deref().unwrap_or(DEFAULT_MONGO_URI)
    }

    /// Return the configured database name, falling back to the default.
    pub fn database(&self) -> &str {
        self.database.as_deref().unwrap_or(DEFAULT_DATABASE)
    }

    /// Parse the configured listen address, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`AddrParseError`] when the configured value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR).parse()
    }

    /// Store location for [`MongoContext::connect`](crate::outbound::persistence::MongoContext::connect).
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.mongo_uri(), self.database())
    }

    /// How envelope statuses reach the HTTP response.
    pub fn status_policy(&self) -> StatusPolicy {
        if self.legacy_status_ok {
            StatusPolicy::AlwaysOk
        } else {
            StatusPolicy::Envelope
        }
    }
}
