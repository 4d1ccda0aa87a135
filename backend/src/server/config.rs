//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use product_service::inbound::http::StatusPolicy;
use product_service::outbound::persistence::MongoContext;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store: MongoContext,
    pub(crate) status_policy: StatusPolicy,
}

impl ServerConfig {
    /// Construct a server configuration over a connected store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, store: MongoContext) -> Self {
        Self {
            bind_addr,
            store,
            status_policy: StatusPolicy::default(),
        }
    }

    /// Choose how envelope statuses map onto HTTP statuses.
    #[must_use]
    pub fn with_status_policy(mut self, status_policy: StatusPolicy) -> Self {
        self.status_policy = status_policy;
        self
    }
}
