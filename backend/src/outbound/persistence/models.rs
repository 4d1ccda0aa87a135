//! Store document shapes. Internal to the persistence layer.
//!
//! Field names are PascalCase and the price is an exact decimal string, which
//! keeps documents written by earlier clients of the `Products` collection
//! readable.

use mongodb::bson::oid::ObjectId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{NewProduct, Product, ProductId};

/// A product as stored in the `Products` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ProductDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Price", with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(rename = "Quantity", default)]
    pub quantity: i32,
}

impl ProductDocument {
    /// Document for a product the store has not assigned an id to yet.
    pub fn from_new(product: &NewProduct) -> Self {
        Self {
            id: None,
            name: product.name.clone(),
            price: product.price,
            quantity: product.quantity,
        }
    }

    /// Replacement document for the record with `id`.
    pub fn replacement(id: ObjectId, product: &Product) -> Self {
        Self {
            id: Some(id),
            name: product.name.clone(),
            price: product.price,
            quantity: product.quantity,
        }
    }

    /// Convert to the domain type, using `id` when the document carries none.
    pub fn into_product(self, fallback_id: Option<ObjectId>) -> Option<Product> {
        let id = self.id.or(fallback_id)?;
        Some(Product {
            id: ProductId::new(id.to_hex()),
            name: self.name,
            price: self.price,
            quantity: self.quantity,
        })
    }
}
