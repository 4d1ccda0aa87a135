//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ProductCommand, ProductQuery};
use crate::inbound::http::StatusPolicy;

/// Parameter object bundling the port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub product_query: Arc<dyn ProductQuery>,
    pub product_command: Arc<dyn ProductCommand>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub product_query: Arc<dyn ProductQuery>,
    pub product_command: Arc<dyn ProductCommand>,
    pub status_policy: StatusPolicy,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state with the default [`StatusPolicy`].
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use product_service::domain::ProductService;
    /// use product_service::inbound::http::state::{HttpState, HttpStatePorts};
    /// use product_service::test_support::InMemoryProductRepository;
    ///
    /// let service = Arc::new(ProductService::new(Arc::new(InMemoryProductRepository::new())));
    /// let state = HttpState::new(HttpStatePorts {
    ///     product_query: service.clone(),
    ///     product_command: service,
    /// });
    /// let _query = state.product_query.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            product_query,
            product_command,
        } = ports;
        Self {
            product_query,
            product_command,
            status_policy: StatusPolicy::default(),
        }
    }

    /// Replace the status policy.
    #[must_use]
    pub fn with_status_policy(mut self, status_policy: StatusPolicy) -> Self {
        self.status_policy = status_policy;
        self
    }
}
