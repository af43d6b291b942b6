//! HTTP middleware for request processing.
//!
//! Provides observability and panic recovery middleware.

pub mod panic;
pub mod tracing;
