//! MongoDB persistence adapters.
//!
//! # Architecture
//!
//! - **One context per process**: [`MongoContext`] owns the client and the
//!   database handle, and makes sure the collections the service writes to
//!   exist before any request is served.
//! - **Generic document access**: [`MongoRepository`] implements the CRUD
//!   primitives for any serde document type over one collection.
//! - **Thin entity adapters**: [`MongoProductRepository`] only translates
//!   between `ProductDocument` and domain types, and maps driver failures to
//!   the port's error type.
//!
//! # Example
//!
//! ```ignore
//! use product_service::outbound::persistence::{MongoContext, MongoProductRepository, StoreConfig};
//!
//! let context = MongoContext::connect(&StoreConfig::new("mongodb://localhost:27017", "mongo")).await?;
//! let repo = MongoProductRepository::new(&context);
//! ```

mod context;
mod models;
mod mongo_error_mapping;
mod mongo_product_repository;
mod mongo_repository;

pub use context::{MongoContext, PRODUCTS_COLLECTION, StoreConfig, StoreError};
pub use mongo_product_repository::MongoProductRepository;
pub use mongo_repository::{MongoRepository, RepositoryError};
