//! Request middleware.
//!
//! Purpose: request lifecycle concerns shared by every route, currently trace
//! correlation and completion logging.

pub mod trace;

pub use trace::Trace;
