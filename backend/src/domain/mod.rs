//! Domain primitives, the response envelope, and the product use-cases.
//!
//! Purpose: keep business rules transport agnostic. Inbound adapters call the
//! driving ports in [`ports`]; outbound adapters implement the driven ports.
//!
//! Public surface:
//! - Error / ErrorCode — infrastructure failures surfaced to adapters.
//! - Product, NewProduct, ProductId — the catalogue entity.
//! - ResponseEnvelope, ValidationError, ResponseStatus — uniform results.
//! - ProductService — validation and orchestration over `ProductRepository`.
//! - TraceId — request correlation identifier.

pub mod envelope;
pub mod error;
pub mod ports;
pub mod product;
mod product_service;
pub mod trace_id;

pub use self::envelope::{ResponseEnvelope, ResponseStatus, ValidationError};
pub use self::error::{Error, ErrorCode};
pub use self::product::{NewProduct, Product, ProductId};
pub use self::product_service::ProductService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
