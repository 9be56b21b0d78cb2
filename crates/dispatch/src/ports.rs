//! Collaborators the dispatch engine depends on.
//!
//! Infrastructure (e.g. `herald-clients`) implements these traits; tests use
//! the generated `Mock*` doubles.

use async_trait::async_trait;
use herald_core::models::{Account, Order, Shipping, ShippingOrder, Tenant, Transaction};
use herald_core::types::{AccountId, ShippingId, TenantId};
use herald_core::CoreResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountApi: Send + Sync {
    async fn get_account(&self, id: AccountId) -> CoreResult<Account>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TenantApi: Send + Sync {
    async fn get_tenant(&self, id: TenantId) -> CoreResult<Tenant>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentApi: Send + Sync {
    async fn get_transaction(&self, id: &str) -> CoreResult<Transaction>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderApi: Send + Sync {
    async fn get_order(&self, id: &str) -> CoreResult<Order>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShippingApi: Send + Sync {
    async fn get_shipping(&self, id: ShippingId) -> CoreResult<Shipping>;

    async fn get_shipping_order(&self, id: ShippingId) -> CoreResult<ShippingOrder>;
}

/// An SMS to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsRequest {
    pub phone_number: String,
    pub message: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SmsGateway: Send + Sync {
    /// Send the message and return the gateway's message id.
    async fn send_message(&self, request: SmsRequest) -> CoreResult<String>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlShortener: Send + Sync {
    async fn shorten(&self, long_url: &str) -> CoreResult<String>;
}
