//! Driving port for product mutations and its request types.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::{Error, NewProduct, Product, ProductId, ResponseEnvelope};

/// Request to create a product. The store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: Decimal,
    pub quantity: i32,
}

impl CreateProductRequest {
    /// Copy the request fields into a product awaiting an identifier.
    pub fn into_new_product(self) -> NewProduct {
        NewProduct {
            name: self.name,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

/// Full-replacement update of an existing product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProductRequest {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub quantity: i32,
}

impl UpdateProductRequest {
    /// Copy the request fields into the replacement product.
    pub fn into_product(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

/// Request to delete a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteProductRequest {
    pub id: ProductId,
}

/// Mutation use-cases exposed to inbound adapters.
///
/// Each call reports at most one validation error, inside the envelope.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductCommand: Send + Sync {
    /// Validate and insert a product.
    async fn create(
        &self,
        request: CreateProductRequest,
    ) -> Result<ResponseEnvelope<Product>, Error>;

    /// Validate and replace an existing product.
    async fn update(
        &self,
        request: UpdateProductRequest,
    ) -> Result<ResponseEnvelope<Product>, Error>;

    /// Delete an existing product.
    async fn delete(&self, request: DeleteProductRequest) -> Result<ResponseEnvelope<()>, Error>;
}
