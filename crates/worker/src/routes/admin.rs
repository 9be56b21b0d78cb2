//! Operator endpoints for the tenant cache. Every route requires
//! [`AdminKey`].

use axum::extract::{Path, State};
use axum::routing::delete;
use axum::{Json, Router};
use herald_core::types::TenantId;
use serde::Serialize;

use crate::middleware::auth::AdminKey;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidatedTenant {
    pub tenant_id: TenantId,
    /// Whether the tenant was cached at all.
    pub removed: bool,
}

#[derive(Debug, Serialize)]
pub struct InvalidatedTenants {
    pub removed: usize,
}

/// DELETE /admin/tenants/{id}
async fn invalidate_tenant(
    _admin: AdminKey,
    State(state): State<AppState>,
    Path(tenant_id): Path<TenantId>,
) -> Json<InvalidatedTenant> {
    let removed = state.tenants.invalidate(tenant_id).await;
    Json(InvalidatedTenant { tenant_id, removed })
}

/// DELETE /admin/tenants
async fn invalidate_all_tenants(
    _admin: AdminKey,
    State(state): State<AppState>,
) -> Json<InvalidatedTenants> {
    let removed = state.tenants.invalidate_all().await;
    Json(InvalidatedTenants { removed })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/tenants", delete(invalidate_all_tenants))
        .route("/admin/tenants/{id}", delete(invalidate_tenant))
}
