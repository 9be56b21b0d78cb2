//! HTTP implementations of the dispatch ports.
//!
//! [`PlatformClients::from_config`] builds one pooled `reqwest` client and
//! hands a service-specific [`ApiClient`] to each port implementation.

pub mod config;
pub mod http;
pub mod platform;
pub mod shortener;
pub mod sms;

use std::sync::Arc;
use std::time::Duration;

use herald_dispatch::ports::{
    AccountApi, OrderApi, PaymentApi, ShippingApi, SmsGateway, TenantApi, UrlShortener,
};

pub use config::ClientConfig;
pub use http::{build_http_client, ApiClient, API_KEY_HEADER};
pub use platform::{AccountClient, OrderClient, PaymentClient, ShippingClient, TenantClient};
pub use shortener::{BitlyShortener, IdentityShortener};
pub use sms::SmsClient;

/// Every port implementation, ready to inject into the notifiers.
pub struct PlatformClients {
    pub accounts: Arc<dyn AccountApi>,
    pub tenants: Arc<dyn TenantApi>,
    pub payments: Arc<dyn PaymentApi>,
    pub orders: Arc<dyn OrderApi>,
    pub shipping: Arc<dyn ShippingApi>,
    pub sms: Arc<dyn SmsGateway>,
    pub shortener: Arc<dyn UrlShortener>,
}

impl PlatformClients {
    pub fn from_config(config: &ClientConfig) -> reqwest::Result<Self> {
        let client = build_http_client(Duration::from_secs(config.http_timeout_secs))?;
        let api = |service: &'static str, url: &str| {
            ApiClient::new(client.clone(), service, url, config.api_key.clone())
        };

        let shortener: Arc<dyn UrlShortener> = match &config.bitly_access_token {
            Some(token) => Arc::new(BitlyShortener::new(
                client.clone(),
                &config.bitly_api_url,
                token.clone(),
            )),
            None => {
                tracing::warn!("BITLY_ACCESS_TOKEN not set, order links are sent unshortened");
                Arc::new(IdentityShortener)
            }
        };

        Ok(Self {
            accounts: Arc::new(AccountClient::new(api("account", &config.account_api_url))),
            tenants: Arc::new(TenantClient::new(api("tenant", &config.tenant_api_url))),
            payments: Arc::new(PaymentClient::new(api("payment", &config.payment_api_url))),
            orders: Arc::new(OrderClient::new(api("order", &config.order_api_url))),
            shipping: Arc::new(ShippingClient::new(api("shipping", &config.shipping_api_url))),
            sms: Arc::new(SmsClient::new(api("sms", &config.sms_api_url))),
            shortener,
        })
    }
}
