//! SMS for the order lifecycle.

use std::sync::Arc;

use herald_core::models::{Order, Tenant};
use herald_events::EventContext;
use tracing::Span;

use crate::delivery::{deliver, recipient_phone};
use crate::error::DispatchResult;
use crate::messages;
use crate::ports::{AccountApi, OrderApi, ShippingApi, SmsGateway};
use crate::render::MessageRenderer;
use crate::tenant::TenantProvider;

pub struct OrderNotifier {
    orders: Arc<dyn OrderApi>,
    accounts: Arc<dyn AccountApi>,
    shipping: Arc<dyn ShippingApi>,
    tenants: Arc<TenantProvider>,
    renderer: Arc<MessageRenderer>,
    sms: Arc<dyn SmsGateway>,
}

impl OrderNotifier {
    pub fn new(
        orders: Arc<dyn OrderApi>,
        accounts: Arc<dyn AccountApi>,
        shipping: Arc<dyn ShippingApi>,
        tenants: Arc<TenantProvider>,
        renderer: Arc<MessageRenderer>,
        sms: Arc<dyn SmsGateway>,
    ) -> Self {
        Self {
            orders,
            accounts,
            shipping,
            tenants,
            renderer,
            sms,
        }
    }

    /// Tell the merchant a new order came in, in the merchant's language.
    pub async fn on_order_opened(
        &self,
        order_id: &str,
        ctx: &EventContext,
    ) -> DispatchResult<Option<String>> {
        let order = self.order(order_id).await?;
        let tenant = self.tenant(&order, ctx).await?;
        let merchant = self.accounts.get_account(order.merchant_id).await?;
        let customer = self.accounts.get_account(order.account_id).await?;

        recipient_phone(&merchant)?;

        let amount = self.renderer.format_money(&tenant, order.total_price)?;
        let link = self.renderer.order_link(&tenant, &order.id).await?;
        let message = self.renderer.render(
            messages::ORDER_OPENED,
            &merchant.language,
            &[&amount, customer.name(), &link],
        );
        deliver(self.sms.as_ref(), &merchant, message).await
    }

    /// Tell the customer their order was cancelled. Needs no tenant.
    pub async fn on_order_cancelled(
        &self,
        order_id: &str,
        _ctx: &EventContext,
    ) -> DispatchResult<Option<String>> {
        let order = self.order(order_id).await?;
        let customer = self.accounts.get_account(order.account_id).await?;

        let short_id = self.renderer.short_id(&order.id);
        let message = self
            .renderer
            .render(messages::ORDER_CANCELLED, &customer.language, &[&short_id]);
        deliver(self.sms.as_ref(), &customer, message).await
    }

    /// Tell the customer their order waits in store.
    ///
    /// Skipped for orders without shipping and for any fulfilment other
    /// than in-store pickup.
    pub async fn on_order_ready_for_pickup(
        &self,
        order_id: &str,
        ctx: &EventContext,
    ) -> DispatchResult<Option<String>> {
        let order = self.order(order_id).await?;
        let Some(shipping_id) = order.shipping_id else {
            tracing::debug!(order_id, "Order has no shipping, not notifying");
            return Ok(None);
        };

        let shipping = self.shipping.get_shipping(shipping_id).await?;
        let span = Span::current();
        span.record("shipping_id", shipping_id);
        span.record("shipping_type", shipping.shipping_type.as_str());
        if !shipping.is_in_store_pickup() {
            tracing::debug!(order_id, shipping_type = %shipping.shipping_type, "Not an in-store pickup, not notifying");
            return Ok(None);
        }

        let tenant = self.tenant(&order, ctx).await?;
        let customer = self.accounts.get_account(order.account_id).await?;
        recipient_phone(&customer)?;

        let short_id = self.renderer.short_id(&order.id);
        let link = self.renderer.order_link(&tenant, &order.id).await?;
        let message = self.renderer.render(
            messages::ORDER_READY_FOR_PICKUP,
            &customer.language,
            &[&short_id, &link],
        );
        deliver(self.sms.as_ref(), &customer, message).await
    }

    async fn order(&self, order_id: &str) -> DispatchResult<Order> {
        let order = self.orders.get_order(order_id).await?;

        let span = Span::current();
        span.record("merchant_id", order.merchant_id);
        span.record("customer_id", order.account_id);
        span.record("amount", order.total_price);

        Ok(order)
    }

    /// The order's own tenant; the context only fills in when the order has none.
    async fn tenant(&self, order: &Order, ctx: &EventContext) -> DispatchResult<Arc<Tenant>> {
        self.tenants.resolve(order.tenant_id.or(ctx.tenant_id)).await
    }
}
