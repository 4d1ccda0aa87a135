//! MongoDB-backed `ProductRepository` implementation.
//!
//! Identifiers that do not parse as ObjectIds can never have been issued by
//! the store, so they match nothing: lookups return `None` and writes are
//! no-ops.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tracing::debug;

use crate::domain::ports::{ProductRepository, ProductRepositoryError};
use crate::domain::{NewProduct, Product, ProductId};

use super::context::{MongoContext, PRODUCTS_COLLECTION};
use super::models::ProductDocument;
use super::mongo_error_mapping::map_basic_mongo_error;
use super::mongo_repository::{MongoRepository, RepositoryError};

/// MongoDB implementation of the product repository port.
#[derive(Clone)]
pub struct MongoProductRepository {
    products: MongoRepository<ProductDocument>,
}

impl MongoProductRepository {
    /// Create a repository over the context's `Products` collection.
    pub fn new(context: &MongoContext) -> Self {
        Self {
            products: MongoRepository::new(context.collection(PRODUCTS_COLLECTION)),
        }
    }
}

fn map_repository_error(error: RepositoryError) -> ProductRepositoryError {
    map_basic_mongo_error(
        error,
        ProductRepositoryError::query,
        ProductRepositoryError::connection,
    )
}

fn parse_object_id(id: &ProductId) -> Option<ObjectId> {
    ObjectId::parse_str(id.as_str()).ok()
}

fn into_product(document: ProductDocument) -> Result<Product, ProductRepositoryError> {
    document
        .into_product(None)
        .ok_or_else(|| ProductRepositoryError::query("stored product has no _id"))
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, ProductRepositoryError> {
        self.products
            .find_all()
            .await
            .map_err(map_repository_error)?
            .into_iter()
            .map(into_product)
            .collect()
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductRepositoryError> {
        let Some(object_id) = parse_object_id(id) else {
            debug!(product_id = %id, "identifier is not an ObjectId");
            return Ok(None);
        };

        self.products
            .find_by_id(object_id)
            .await
            .map_err(map_repository_error)?
            .map(into_product)
            .transpose()
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, ProductRepositoryError> {
        let document = ProductDocument::from_new(product);
        let object_id = self
            .products
            .insert(&document)
            .await
            .map_err(map_repository_error)?;
        into_product(ProductDocument {
            id: Some(object_id),
            ..document
        })
    }

    async fn update(
        &self,
        id: &ProductId,
        product: &Product,
    ) -> Result<(), ProductRepositoryError> {
        let Some(object_id) = parse_object_id(id) else {
            debug!(product_id = %id, "skipping replace for non-ObjectId identifier");
            return Ok(());
        };

        let matched = self
            .products
            .replace_by_id(object_id, &ProductDocument::replacement(object_id, product))
            .await
            .map_err(map_repository_error)?;
        debug!(
            product_id = %id,
            matched,
            collection = self.products.collection_name(),
            "replace finished"
        );
        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ProductRepositoryError> {
        let Some(object_id) = parse_object_id(id) else {
            debug!(product_id = %id, "skipping delete for non-ObjectId identifier");
            return Ok(());
        };

        let deleted = self
            .products
            .delete_by_id(object_id)
            .await
            .map_err(map_repository_error)?;
        debug!(
            product_id = %id,
            deleted,
            collection = self.products.collection_name(),
            "delete finished"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Identifier handling that needs no server.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("65f0c0ffee00000000000001", true)]
    #[case("65F0C0FFEE00000000000001", true)]
    #[case("missing", false)]
    #[case("", false)]
    #[case("65f0c0ffee0000000000000", false)]
    fn only_object_id_hex_is_addressable(#[case] raw: &str, #[case] addressable: bool) {
        assert_eq!(parse_object_id(&ProductId::new(raw)).is_some(), addressable);
    }

    #[rstest]
    fn documents_without_id_are_query_errors() {
        let document = ProductDocument::from_new(&NewProduct {
            name: "Pen".to_owned(),
            price: rust_decimal::Decimal::ONE,
            quantity: 1,
        });

        let err = into_product(document).expect_err("id is required");
        assert!(matches!(err, ProductRepositoryError::Query { .. }));
    }
}
