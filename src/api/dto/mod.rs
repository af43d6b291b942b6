//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs use Serde for deserialization and validator for input
//! validation. Pipeline results are serialized directly from the domain
//! entities.

pub mod download;
pub mod health;
pub mod index;
pub mod link;
