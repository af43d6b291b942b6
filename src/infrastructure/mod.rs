//! Infrastructure layer implementing external integrations.
//!
//! # Modules
//!
//! - [`http`] - reqwest gateway to the video platform
//! - [`storage`] - Streaming file writer
//!
//! # Design Pattern
//!
//! Infrastructure implementations depend on domain traits, not vice versa.
//! This enables swapping implementations (e.g., a stub gateway for tests)
//! without changing business logic.

pub mod http;
pub mod storage;
