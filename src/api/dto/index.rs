//! DTOs for the service description endpoint.

use serde::Serialize;
use std::collections::BTreeMap;

/// Static description of the service and its endpoints.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub version: &'static str,
    /// Path to short description.
    pub endpoints: BTreeMap<&'static str, &'static str>,
    pub usage: BTreeMap<&'static str, EndpointUsage>,
}

/// How to call one endpoint.
#[derive(Debug, Serialize)]
pub struct EndpointUsage {
    pub method: &'static str,
    /// Body field name to description.
    pub body: BTreeMap<&'static str, &'static str>,
    pub description: &'static str,
}
