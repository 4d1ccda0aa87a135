//! Test utilities for the backend crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`).
//! Compiled for tests and when the `test-support` feature is enabled.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::ports::{ProductRepository, ProductRepositoryError};
use crate::domain::{NewProduct, Product, ProductId};

#[derive(Default)]
struct InMemoryState {
    products: Vec<Product>,
    writes: usize,
    failure: Option<ProductRepositoryError>,
}

/// Product repository keeping documents in insertion order in memory.
///
/// Identifiers are fresh ObjectId hex strings, so requests carrying
/// malformed ids behave as they would against the real store: they match
/// nothing.
///
/// # Examples
///
/// ```rust
/// use product_service::test_support::InMemoryProductRepository;
///
/// let repo = InMemoryProductRepository::new();
/// assert_eq!(repo.write_count(), 0);
/// ```
#[derive(Default)]
pub struct InMemoryProductRepository {
    state: Mutex<InMemoryState>,
}

impl InMemoryProductRepository {
    /// Empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository seeded with `products`, bypassing validation the way a
    /// direct store write would.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let repo = Self::new();
        repo.lock().products.extend(products);
        repo
    }

    /// Snapshot of the stored products.
    pub fn products(&self) -> Vec<Product> {
        self.lock().products.clone()
    }

    /// Number of successful creates, replaces and deletes so far.
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    /// Make every following call fail with `error` until cleared with `None`.
    pub fn set_failure(&self, error: Option<ProductRepositoryError>) {
        self.lock().failure = error;
    }

    fn lock(&self) -> MutexGuard<'_, InMemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn checked(&self) -> Result<MutexGuard<'_, InMemoryState>, ProductRepositoryError> {
        let state = self.lock();
        match &state.failure {
            Some(error) => Err(error.clone()),
            None => Ok(state),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, ProductRepositoryError> {
        Ok(self.checked()?.products.clone())
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductRepositoryError> {
        Ok(self
            .checked()?
            .products
            .iter()
            .find(|product| &product.id == id)
            .cloned())
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, ProductRepositoryError> {
        let mut state = self.checked()?;
        let created = Product::from_new(
            ProductId::new(ObjectId::new().to_hex()),
            product.clone(),
        );
        state.products.push(created.clone());
        state.writes += 1;
        Ok(created)
    }

    async fn update(
        &self,
        id: &ProductId,
        product: &Product,
    ) -> Result<(), ProductRepositoryError> {
        let mut state = self.checked()?;
        if let Some(slot) = state.products.iter_mut().find(|stored| &stored.id == id) {
            *slot = Product {
                id: id.clone(),
                ..product.clone()
            };
            state.writes += 1;
        }
        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ProductRepositoryError> {
        let mut state = self.checked()?;
        let before = state.products.len();
        state.products.retain(|stored| &stored.id != id);
        if state.products.len() != before {
            state.writes += 1;
        }
        Ok(())
    }
}
