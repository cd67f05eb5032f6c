use std::collections::HashMap;
use std::sync::Arc;

use log::info;
use tokio::sync::RwLock;

/// Last artifact accepted per tenant. In memory only, last write wins.
///
/// Cheap to clone; clones share the same table.
#[derive(Debug, Clone, Default)]
pub struct ArtifactRegistry {
    inner: Arc<RwLock<HashMap<u64, String>>>,
}

impl ArtifactRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record(&self, tenant: u64, filename: impl Into<String>) {
        let filename = filename.into();
        info!("Tenant {tenant}: last artifact is now {filename}");
        self.inner.write().await.insert(tenant, filename);
    }

    pub async fn last(&self, tenant: u64) -> Option<String> {
        self.inner.read().await.get(&tenant).cloned()
    }
}
