//! Driving port for product reads.

use async_trait::async_trait;

use crate::domain::{Error, Product, ProductId, ResponseEnvelope};

/// Read use-cases exposed to inbound adapters.
///
/// A missing product is reported inside the envelope; `Err` is reserved for
/// infrastructure failures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductQuery: Send + Sync {
    /// List every product.
    async fn get_all(&self) -> Result<ResponseEnvelope<Vec<Product>>, Error>;

    /// Fetch one product.
    async fn get_by_id(&self, id: &ProductId) -> Result<ResponseEnvelope<Product>, Error>;
}
