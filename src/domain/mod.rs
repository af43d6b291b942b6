//! Domain layer containing pipeline entities, errors, and gateway contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Metadata and result types
//! - [`errors`] - Failure taxonomy shared by every pipeline stage
//! - [`gateways`] - Trait describing the upstream video platform
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Gateway traits define contracts implemented by the infrastructure layer
//! - Orchestration lives in services (see [`crate::application::services`])

pub mod entities;
pub mod errors;
pub mod gateways;
