//! Gateway trait definitions for the upstream video platform.
//!
//! # Architecture
//!
//! - Traits define the contract for upstream operations
//! - Implementations live in `crate::infrastructure::http`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod video_gateway;

pub use video_gateway::{ByteStream, VideoGateway};

#[cfg(test)]
pub use video_gateway::MockVideoGateway;
