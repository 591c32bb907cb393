use std::sync::Arc;

use service::ResourceStores;
use tokio::sync::RwLock;

pub const DEFAULT_LANGUAGE: &str = "en";

/// Shared router state. Built once at startup and dropped on shutdown.
#[derive(Clone)]
pub struct AppState {
    pub stores: ResourceStores,
    pub language: Arc<RwLock<String>>,
}

impl AppState {
    pub fn new(stores: ResourceStores) -> Self {
        Self { stores, language: Arc::new(RwLock::new(DEFAULT_LANGUAGE.to_string())) }
    }
}

impl Default for AppState {
    fn default() -> Self { Self::new(ResourceStores::new()) }
}
