//! HTTP access to the video platform.
//!
//! Provides [`DouyinGateway`], the reqwest-backed [`crate::domain::gateways::VideoGateway`].

mod client;
mod douyin_gateway;
mod models;

pub use client::{DEFAULT_METADATA_ENDPOINT, DEFAULT_USER_AGENT, HttpClientConfig, build_client};
pub use douyin_gateway::DouyinGateway;
