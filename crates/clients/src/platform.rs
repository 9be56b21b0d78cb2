//! Read clients for the platform services the notifiers enrich from.
//!
//! Every service wraps its record in a single named field
//! (`{"account": {...}}`), hence the small envelope structs.

use async_trait::async_trait;
use herald_core::models::{Account, Order, Shipping, ShippingOrder, Tenant, Transaction};
use herald_core::types::{AccountId, ShippingId, TenantId};
use herald_core::CoreResult;
use herald_dispatch::ports::{AccountApi, OrderApi, PaymentApi, ShippingApi, TenantApi};
use serde::Deserialize;

use crate::http::ApiClient;

#[derive(Deserialize)]
struct AccountEnvelope {
    account: Account,
}

#[derive(Deserialize)]
struct TenantEnvelope {
    tenant: Tenant,
}

#[derive(Deserialize)]
struct TransactionEnvelope {
    transaction: Transaction,
}

#[derive(Deserialize)]
struct OrderEnvelope {
    order: Order,
}

#[derive(Deserialize)]
struct ShippingEnvelope {
    shipping: Shipping,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShippingOrderEnvelope {
    shipping_order: ShippingOrder,
}

// ---------------------------------------------------------------------------
// Accounts / tenants
// ---------------------------------------------------------------------------

pub struct AccountClient {
    api: ApiClient,
}

impl AccountClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AccountApi for AccountClient {
    async fn get_account(&self, id: AccountId) -> CoreResult<Account> {
        let id = id.to_string();
        let body: AccountEnvelope = self.api.get_json(&["v1", "accounts", &id], "account", &id).await?;
        Ok(body.account)
    }
}

pub struct TenantClient {
    api: ApiClient,
}

impl TenantClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl TenantApi for TenantClient {
    async fn get_tenant(&self, id: TenantId) -> CoreResult<Tenant> {
        let id = id.to_string();
        let body: TenantEnvelope = self.api.get_json(&["v1", "tenants", &id], "tenant", &id).await?;
        Ok(body.tenant)
    }
}

// ---------------------------------------------------------------------------
// Payments
// ---------------------------------------------------------------------------

pub struct PaymentClient {
    api: ApiClient,
}

impl PaymentClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl PaymentApi for PaymentClient {
    async fn get_transaction(&self, id: &str) -> CoreResult<Transaction> {
        let body: TransactionEnvelope = self
            .api
            .get_json(&["v1", "transactions", id], "transaction", id)
            .await?;
        Ok(body.transaction)
    }
}

// ---------------------------------------------------------------------------
// Orders / shipping
// ---------------------------------------------------------------------------

pub struct OrderClient {
    api: ApiClient,
}

impl OrderClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl OrderApi for OrderClient {
    async fn get_order(&self, id: &str) -> CoreResult<Order> {
        let body: OrderEnvelope = self
            .api
            .get_json(&["v1", "orders", id], "order", id)
            .await?;
        Ok(body.order)
    }
}

pub struct ShippingClient {
    api: ApiClient,
}

impl ShippingClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ShippingApi for ShippingClient {
    async fn get_shipping(&self, id: ShippingId) -> CoreResult<Shipping> {
        let id = id.to_string();
        let body: ShippingEnvelope = self.api.get_json(&["v1", "shippings", &id], "shipping", &id).await?;
        Ok(body.shipping)
    }

    async fn get_shipping_order(&self, id: ShippingId) -> CoreResult<ShippingOrder> {
        let id = id.to_string();
        let body: ShippingOrderEnvelope = self
            .api
            .get_json(&["v1", "shipping-orders", &id], "shipping order", &id)
            .await?;
        Ok(body.shipping_order)
    }
}
