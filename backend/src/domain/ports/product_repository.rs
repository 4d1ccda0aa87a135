//! Driven port for product persistence.

use async_trait::async_trait;

use crate::domain::{NewProduct, Product, ProductId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by product repository adapters.
    pub enum ProductRepositoryError {
        /// The store could not be reached.
        Connection { message: String } =>
            "product repository connection failed: {message}",
        /// A query or mutation failed during execution.
        Query { message: String } =>
            "product repository query failed: {message}",
    }
}

/// CRUD access to the product collection.
///
/// Matching is exact equality on the identifier. `update` and `delete` are
/// no-ops when nothing matches; callers check existence first when the
/// difference matters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every stored product, unpaginated.
    async fn get_all(&self) -> Result<Vec<Product>, ProductRepositoryError>;

    /// The product with `id`, or `None` when absent.
    async fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductRepositoryError>;

    /// Insert a product and return it with its store-assigned identifier.
    async fn create(&self, product: &NewProduct) -> Result<Product, ProductRepositoryError>;

    /// Replace the whole record matching `id`.
    async fn update(&self, id: &ProductId, product: &Product)
    -> Result<(), ProductRepositoryError>;

    /// Remove the record matching `id`.
    async fn delete(&self, id: &ProductId) -> Result<(), ProductRepositoryError>;
}
