//! Product entity and identifier.
//!
//! ## Invariants
//! A product accepted by [`ProductService`](crate::domain::ProductService)
//! has a non-empty name and a strictly positive price. The types themselves
//! do not enforce this: records written straight to the store bypass the
//! service, so reads must tolerate any values.
//!
//! ## Serialisation
//! Products serialise as camelCase JSON with the price rendered as a JSON
//! number: `{"id": "...", "name": "Pen", "price": 2.5, "quantity": 10}`.
//! The number carries the decimal's exact digits and scale, so `2.50`
//! stays `2.50` and high-precision prices are never rounded through `f64`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Store-assigned product identifier in its string form.
///
/// The store uses 24-character hexadecimal object identifiers, but any
/// string is accepted here; identifiers the store could never have issued
/// simply never match a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Wrap an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Product fields before the store assigns an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub quantity: i32,
}

/// Persisted catalogue product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub quantity: i32,
}

impl Product {
    /// Attach a store-assigned identifier to a new product.
    pub fn from_new(id: ProductId, product: NewProduct) -> Self {
        let NewProduct {
            name,
            price,
            quantity,
        } = product;
        Self {
            id,
            name,
            price,
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn product_serialises_price_as_number() {
        let product = Product {
            id: ProductId::new("65f0c0ffee00000000000001"),
            name: "Pen".to_owned(),
            price: Decimal::new(25, 1),
            quantity: 10,
        };

        let value = serde_json::to_value(&product).expect("serialise product");
        assert_eq!(
            value,
            json!({
                "id": "65f0c0ffee00000000000001",
                "name": "Pen",
                "price": 2.5,
                "quantity": 10
            })
        );
    }

    #[rstest]
    #[case("12345678901234567.89")]
    #[case("0.0000000000000000000000000001")]
    #[case("2.50")]
    fn price_survives_json_round_trip_exactly(#[case] price: &str) {
        let product = Product {
            id: ProductId::new("65f0c0ffee00000000000001"),
            name: "Pen".to_owned(),
            price: price.parse().expect("decimal literal"),
            quantity: 1,
        };

        let text = serde_json::to_string(&product).expect("serialise product");
        assert!(
            text.contains(&format!("\"price\":{price},")),
            "price written verbatim as a number: {text}"
        );
        let decoded: Product = serde_json::from_str(&text).expect("deserialise product");
        assert_eq!(decoded, product);
        assert_eq!(decoded.price.to_string(), price);
    }

    #[rstest]
    fn from_new_copies_every_field() {
        let product = Product::from_new(
            ProductId::from("abc"),
            NewProduct {
                name: "Lamp".to_owned(),
                price: Decimal::new(1999, 2),
                quantity: 3,
            },
        );

        assert_eq!(product.id.as_str(), "abc");
        assert_eq!(product.name, "Lamp");
        assert_eq!(product.price, Decimal::new(1999, 2));
        assert_eq!(product.quantity, 3);
    }
}
