#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use herald_clients::{ClientConfig, IdentityShortener, PlatformClients};
use herald_core::models::{Account, Order, Phone, Shipping, ShippingOrder, Tenant, Transaction};
use herald_core::types::{AccountId, ShippingId, TenantId};
use herald_core::{CoreError, CoreResult};
use herald_dispatch::ports::{
    AccountApi, OrderApi, PaymentApi, ShippingApi, SmsGateway, SmsRequest, TenantApi,
};
use herald_dispatch::Catalog;
use herald_worker::config::WorkerConfig;
use herald_worker::routes;
use herald_worker::state::AppState;
use http_body_util::BodyExt;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// In-memory platform
// ---------------------------------------------------------------------------

/// Every platform service backed by maps, recording sent SMS.
#[derive(Default)]
pub struct FakePlatform {
    pub accounts: HashMap<AccountId, Account>,
    pub tenants: HashMap<TenantId, Tenant>,
    pub transactions: HashMap<String, Transaction>,
    pub orders: HashMap<String, Order>,
    pub shippings: HashMap<ShippingId, Shipping>,
    pub shipping_orders: HashMap<ShippingId, ShippingOrder>,
    pub sent: Mutex<Vec<SmsRequest>>,
    pub tenant_fetches: AtomicUsize,
    /// When set, every SMS send fails with this HTTP status.
    pub sms_failure: Option<u16>,
}

impl FakePlatform {
    pub fn sent(&self) -> Vec<SmsRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn tenant_fetches(&self) -> usize {
        self.tenant_fetches.load(Ordering::SeqCst)
    }
}

fn not_found(entity: &'static str, id: impl ToString) -> CoreError {
    CoreError::NotFound {
        entity,
        id: id.to_string(),
    }
}

#[async_trait]
impl AccountApi for FakePlatform {
    async fn get_account(&self, id: AccountId) -> CoreResult<Account> {
        self.accounts.get(&id).cloned().ok_or_else(|| not_found("account", id))
    }
}

#[async_trait]
impl TenantApi for FakePlatform {
    async fn get_tenant(&self, id: TenantId) -> CoreResult<Tenant> {
        self.tenant_fetches.fetch_add(1, Ordering::SeqCst);
        self.tenants.get(&id).cloned().ok_or_else(|| not_found("tenant", id))
    }
}

#[async_trait]
impl PaymentApi for FakePlatform {
    async fn get_transaction(&self, id: &str) -> CoreResult<Transaction> {
        self.transactions
            .get(id)
            .cloned()
            .ok_or_else(|| not_found("transaction", id))
    }
}

#[async_trait]
impl OrderApi for FakePlatform {
    async fn get_order(&self, id: &str) -> CoreResult<Order> {
        self.orders.get(id).cloned().ok_or_else(|| not_found("order", id))
    }
}

#[async_trait]
impl ShippingApi for FakePlatform {
    async fn get_shipping(&self, id: ShippingId) -> CoreResult<Shipping> {
        self.shippings.get(&id).cloned().ok_or_else(|| not_found("shipping", id))
    }

    async fn get_shipping_order(&self, id: ShippingId) -> CoreResult<ShippingOrder> {
        self.shipping_orders
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found("shipping order", id))
    }
}

#[async_trait]
impl SmsGateway for FakePlatform {
    async fn send_message(&self, request: SmsRequest) -> CoreResult<String> {
        if let Some(status) = self.sms_failure {
            return Err(CoreError::Status {
                service: "sms",
                status,
            });
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push(request);
        Ok(format!("msg-{}", sent.len()))
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub const ADMIN_KEY: &str = "admin-secret";

pub const CUSTOMER: AccountId = 1;
pub const MERCHANT: AccountId = 11;

pub fn account(id: AccountId, name: &str, language: &str, phone: Option<&str>) -> Account {
    Account {
        id,
        display_name: Some(name.to_string()),
        language: language.to_string(),
        phone: phone.map(|number| Phone {
            number: number.to_string(),
        }),
    }
}

/// Customer, merchant, tenant 1 and order `39043094`.
pub fn seeded_platform() -> FakePlatform {
    let mut platform = FakePlatform::default();
    platform.accounts.insert(
        CUSTOMER,
        account(CUSTOMER, "Roger Milla", "en", Some("+237695096501")),
    );
    platform.accounts.insert(
        MERCHANT,
        account(MERCHANT, "Ray Sponsible", "fr", Some("+237695096511")),
    );
    platform.tenants.insert(
        1,
        Tenant {
            id: 1,
            monetary_format: "#,###,##0 XAF".to_string(),
            webapp_url: "https://shop.example.com".to_string(),
        },
    );
    platform.orders.insert(
        "39043094".to_string(),
        Order {
            id: "39043094".to_string(),
            account_id: CUSTOMER,
            merchant_id: MERCHANT,
            total_price: 5100.0,
            currency: Some("XAF".to_string()),
            shipping_id: Some(7),
            tenant_id: Some(1),
        },
    );
    platform
}

pub fn test_config() -> WorkerConfig {
    WorkerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        tenant_cache_ttl_secs: 300,
        default_locale: "en".to_string(),
        messages_file: None,
        json_logs: false,
        clients: ClientConfig {
            api_key: Some(ADMIN_KEY.to_string()),
            ..ClientConfig::single_host("http://127.0.0.1:1")
        },
    }
}

/// The full application router on top of `platform`.
pub fn build_test_app(platform: Arc<FakePlatform>) -> Router {
    build_test_app_with_catalog(platform, Catalog::new())
}

pub fn build_test_app_with_catalog(platform: Arc<FakePlatform>, catalog: Catalog) -> Router {
    build_test_app_with_config(platform, catalog, test_config())
}

pub fn build_test_app_with_config(
    platform: Arc<FakePlatform>,
    catalog: Catalog,
    config: WorkerConfig,
) -> Router {
    let clients = PlatformClients {
        accounts: platform.clone(),
        tenants: platform.clone(),
        payments: platform.clone(),
        orders: platform.clone(),
        shipping: platform.clone(),
        sms: platform,
        shortener: Arc::new(IdentityShortener),
    };
    let state = AppState::build(clients, &config, catalog);
    routes::app(state, Duration::from_secs(config.request_timeout_secs))
}

// ---------------------------------------------------------------------------
// HTTP helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::delete(uri).body(Body::empty()).unwrap()).await
}

/// DELETE carrying the admin API key.
pub async fn admin_delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::delete(uri)
        .header("x-api-key", ADMIN_KEY)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// POST an event envelope with optional tracing headers.
pub async fn post_event(
    app: Router,
    body: serde_json::Value,
    headers: &[(&str, &str)],
) -> Response<Body> {
    let mut request = Request::builder()
        .method(Method::POST)
        .uri("/events")
        .header("content-type", "application/json");
    for (name, value) in headers {
        request = request.header(*name, *value);
    }
    send(app, request.body(Body::from(body.to_string())).unwrap()).await
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
