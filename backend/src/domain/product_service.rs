//! Product use-cases: field validation, existence checks, persistence.
//!
//! Every operation runs a short validation sequence and stops at the first
//! failure, so an envelope never carries more than one error. Repository
//! failures are not validation problems and surface as [`Error`].

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    CreateProductRequest, DeleteProductRequest, ProductCommand, ProductQuery, ProductRepository,
    ProductRepositoryError, UpdateProductRequest,
};
use crate::domain::{
    Error, Product, ProductId, ResponseEnvelope, ResponseStatus, ValidationError,
};

const FIELD_ID: &str = "Id";
// Update reports both of its failures under the lowercase identifier field;
// existing clients match on it.
const FIELD_UPDATE_ID: &str = "id";
const FIELD_NAME: &str = "Name";
const FIELD_PRICE: &str = "Price";

const PRODUCT_NOT_FOUND: &str = "Produto não encontrado";
const PRODUCT_NOT_FOUND_FOR_UPDATE: &str = "Produto não encontrado para atualização.";
const PRODUCT_NOT_FOUND_FOR_DELETE: &str = "Produto não encontrado para exclusão";
const PRICE_NOT_POSITIVE: &str = "O preço do produto deve ser maior que zero.";
const NAME_REQUIRED: &str = "O nome do produto é obrigatório.";

fn map_repository_error(error: ProductRepositoryError) -> Error {
    warn!(%error, "product repository failure");
    match error {
        ProductRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("product repository unavailable: {message}"))
        }
        ProductRepositoryError::Query { message } => {
            Error::internal(format!("product repository error: {message}"))
        }
    }
}

fn has_positive_price(price: Decimal) -> bool {
    price > Decimal::ZERO
}

/// Product service implementing the query and command driving ports.
#[derive(Clone)]
pub struct ProductService<R> {
    product_repo: Arc<R>,
}

impl<R> ProductService<R> {
    /// Create a service over the product repository.
    pub fn new(product_repo: Arc<R>) -> Self {
        Self { product_repo }
    }
}

impl<R> ProductService<R>
where
    R: ProductRepository,
{
    async fn find(&self, id: &ProductId) -> Result<Option<Product>, Error> {
        self.product_repo
            .get_by_id(id)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> ProductQuery for ProductService<R>
where
    R: ProductRepository,
{
    async fn get_all(&self) -> Result<ResponseEnvelope<Vec<Product>>, Error> {
        let products = self
            .product_repo
            .get_all()
            .await
            .map_err(map_repository_error)?;
        Ok(ResponseEnvelope::with_data(products))
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<ResponseEnvelope<Product>, Error> {
        match self.find(id).await? {
            Some(product) => Ok(ResponseEnvelope::with_data(product)),
            None => {
                debug!(product_id = %id, "product not found");
                Ok(ResponseEnvelope::failed(ValidationError::new(
                    FIELD_ID,
                    PRODUCT_NOT_FOUND,
                )))
            }
        }
    }
}

#[async_trait]
impl<R> ProductCommand for ProductService<R>
where
    R: ProductRepository,
{
    async fn create(
        &self,
        request: CreateProductRequest,
    ) -> Result<ResponseEnvelope<Product>, Error> {
        if !has_positive_price(request.price) {
            return Ok(ResponseEnvelope::failed(ValidationError::new(
                FIELD_PRICE,
                PRICE_NOT_POSITIVE,
            )));
        }
        if request.name.is_empty() {
            return Ok(ResponseEnvelope::failed(ValidationError::new(
                FIELD_NAME,
                NAME_REQUIRED,
            )));
        }

        let product = self
            .product_repo
            .create(&request.into_new_product())
            .await
            .map_err(map_repository_error)?;
        info!(product_id = %product.id, "product created");

        let mut envelope = ResponseEnvelope::new();
        envelope.add_data_with_status(product, ResponseStatus::CREATED);
        Ok(envelope)
    }

    async fn update(
        &self,
        request: UpdateProductRequest,
    ) -> Result<ResponseEnvelope<Product>, Error> {
        let Some(existing) = self.find(&request.id).await? else {
            debug!(product_id = %request.id, "update target not found");
            return Ok(ResponseEnvelope::failed(ValidationError::new(
                FIELD_UPDATE_ID,
                PRODUCT_NOT_FOUND_FOR_UPDATE,
            )));
        };
        if !has_positive_price(request.price) {
            return Ok(ResponseEnvelope::failed(ValidationError::new(
                FIELD_UPDATE_ID,
                PRICE_NOT_POSITIVE,
            )));
        }

        // The stored id is canonical; the requested one may differ in case.
        let product = Product {
            id: existing.id,
            ..request.into_product()
        };
        self.product_repo
            .update(&product.id, &product)
            .await
            .map_err(map_repository_error)?;
        info!(product_id = %product.id, "product replaced");

        Ok(ResponseEnvelope::with_data(product))
    }

    async fn delete(&self, request: DeleteProductRequest) -> Result<ResponseEnvelope<()>, Error> {
        if self.find(&request.id).await?.is_none() {
            debug!(product_id = %request.id, "delete target not found");
            return Ok(ResponseEnvelope::failed(ValidationError::new(
                FIELD_ID,
                PRODUCT_NOT_FOUND_FOR_DELETE,
            )));
        }

        self.product_repo
            .delete(&request.id)
            .await
            .map_err(map_repository_error)?;
        info!(product_id = %request.id, "product deleted");

        Ok(ResponseEnvelope::new())
    }
}

#[cfg(test)]
#[path = "product_service_tests.rs"]
mod tests;
