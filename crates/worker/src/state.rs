use std::sync::Arc;
use std::time::Duration;

use herald_clients::PlatformClients;
use herald_dispatch::{
    Catalog, EventRouter, MessageRenderer, OrderNotifier, PaymentNotifier, ShippingNotifier,
    TenantProvider,
};

use crate::config::WorkerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<EventRouter>,
    /// Also reachable from the admin routes for invalidation.
    pub tenants: Arc<TenantProvider>,
    /// Shared secret the admin routes require; `None` disables them.
    pub admin_key: Option<Arc<str>>,
}

impl AppState {
    /// Wire the notifiers and the router on top of `clients`.
    ///
    /// `catalog` overrides the built-in message templates.
    pub fn build(clients: PlatformClients, config: &WorkerConfig, catalog: Catalog) -> Self {
        let tenants = Arc::new(TenantProvider::new(
            clients.tenants,
            Duration::from_secs(config.tenant_cache_ttl_secs),
        ));
        let renderer = Arc::new(
            MessageRenderer::new(clients.shortener)
                .with_default_locale(config.default_locale.as_str())
                .with_catalog(catalog),
        );

        let payment = PaymentNotifier::new(
            clients.payments,
            Arc::clone(&clients.accounts),
            Arc::clone(&tenants),
            Arc::clone(&renderer),
            Arc::clone(&clients.sms),
        );
        let order = OrderNotifier::new(
            clients.orders,
            Arc::clone(&clients.accounts),
            Arc::clone(&clients.shipping),
            Arc::clone(&tenants),
            Arc::clone(&renderer),
            Arc::clone(&clients.sms),
        );
        let shipping =
            ShippingNotifier::new(clients.shipping, clients.accounts, renderer, clients.sms);

        let router = EventRouter::new(Arc::new(payment), Arc::new(order), Arc::new(shipping));

        Self {
            router: Arc::new(router),
            tenants,
            admin_key: config.clients.api_key.as_deref().map(Arc::from),
        }
    }
}
