//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: MongoDB-backed repositories and the shared store
//!   context.
//!
//! Adapters translate between domain types and store documents. They contain
//! no business logic.

pub mod persistence;
