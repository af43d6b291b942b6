//! Shared application state injected into handlers.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::services::{DownloadService, ResolveService};
use crate::domain::gateways::VideoGateway;

/// Services shared by all request handlers.
///
/// Cloning is cheap; nothing in here is mutated after construction.
#[derive(Clone)]
pub struct AppState {
    pub resolve_service: Arc<ResolveService>,
    pub download_service: Arc<DownloadService>,
}

impl AppState {
    /// Wires both services around a single gateway.
    pub fn new(
        gateway: Arc<dyn VideoGateway>,
        short_link_hosts: Vec<String>,
        download_dir: PathBuf,
    ) -> Self {
        let resolve_service = Arc::new(ResolveService::new(gateway.clone(), short_link_hosts));
        let download_service = Arc::new(DownloadService::new(
            resolve_service.clone(),
            gateway,
            download_dir,
        ));

        Self {
            resolve_service,
            download_service,
        }
    }
}
