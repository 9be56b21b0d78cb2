//! Read-through tenant cache.
//!
//! Tenant configuration (currency pattern, web-app URL) is small and changes
//! rarely, so it is cached process-wide. Entries expire after a fixed TTL and
//! operators can drop them explicitly through [`TenantProvider::invalidate`]
//! and [`TenantProvider::invalidate_all`].

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use herald_core::models::Tenant;
use herald_core::types::TenantId;
use herald_core::CoreResult;
use tokio::sync::RwLock;

use crate::error::{DispatchError, DispatchResult};
use crate::ports::TenantApi;

/// Default time a cached tenant stays valid.
pub const DEFAULT_TENANT_TTL: Duration = Duration::from_secs(300);

struct CachedTenant {
    tenant: Arc<Tenant>,
    fetched_at: Instant,
}

/// Cache-by-id lookup of tenant configuration.
///
/// Thread-safe via interior `RwLock`; share it behind an `Arc`.
pub struct TenantProvider {
    api: Arc<dyn TenantApi>,
    ttl: Duration,
    entries: RwLock<HashMap<TenantId, CachedTenant>>,
}

impl TenantProvider {
    pub fn new(api: Arc<dyn TenantApi>, ttl: Duration) -> Self {
        Self {
            api,
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Return the tenant, fetching it when absent or expired.
    pub async fn get(&self, id: TenantId) -> CoreResult<Arc<Tenant>> {
        if let Some(entry) = self.entries.read().await.get(&id) {
            if entry.fetched_at.elapsed() < self.ttl {
                return Ok(Arc::clone(&entry.tenant));
            }
        }

        let tenant = Arc::new(self.api.get_tenant(id).await?);
        tracing::debug!(tenant_id = id, "Tenant loaded");

        self.entries.write().await.insert(
            id,
            CachedTenant {
                tenant: Arc::clone(&tenant),
                fetched_at: Instant::now(),
            },
        );
        Ok(tenant)
    }

    /// Resolve the tenant of the current event.
    ///
    /// `id` is whatever the caller found first (payload, entity, tracing
    /// context). `None` is a fatal [`DispatchError::MissingTenant`].
    pub async fn resolve(&self, id: Option<TenantId>) -> DispatchResult<Arc<Tenant>> {
        let id = id.ok_or(DispatchError::MissingTenant)?;
        Ok(self.get(id).await?)
    }

    /// Drop one tenant from the cache. Returns whether it was cached.
    pub async fn invalidate(&self, id: TenantId) -> bool {
        let removed = self.entries.write().await.remove(&id).is_some();
        tracing::info!(tenant_id = id, removed, "Tenant cache entry invalidated");
        removed
    }

    /// Drop every cached tenant. Returns how many entries were removed.
    pub async fn invalidate_all(&self) -> usize {
        let mut entries = self.entries.write().await;
        let count = entries.len();
        entries.clear();
        tracing::info!(count, "Tenant cache cleared");
        count
    }

    /// Number of cached entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
