//! SMS for shipping lifecycle events.

use std::sync::Arc;

use herald_core::types::ShippingId;
use herald_events::EventContext;
use tracing::Span;

use crate::delivery::deliver;
use crate::error::DispatchResult;
use crate::messages;
use crate::ports::{AccountApi, ShippingApi, SmsGateway};
use crate::render::MessageRenderer;

pub struct ShippingNotifier {
    shipping: Arc<dyn ShippingApi>,
    accounts: Arc<dyn AccountApi>,
    renderer: Arc<MessageRenderer>,
    sms: Arc<dyn SmsGateway>,
}

impl ShippingNotifier {
    pub fn new(
        shipping: Arc<dyn ShippingApi>,
        accounts: Arc<dyn AccountApi>,
        renderer: Arc<MessageRenderer>,
        sms: Arc<dyn SmsGateway>,
    ) -> Self {
        Self {
            shipping,
            accounts,
            renderer,
            sms,
        }
    }

    /// Tell the customer a pickup order is ready in store.
    pub async fn on_shipping_ready_for_pickup(
        &self,
        shipping_order_id: ShippingId,
        _ctx: &EventContext,
    ) -> DispatchResult<Option<String>> {
        let shipping_order = self.shipping.get_shipping_order(shipping_order_id).await?;

        let span = Span::current();
        span.record("order_id", shipping_order.order_id.as_str());
        span.record("customer_id", shipping_order.customer_id);
        span.record("shipping_type", shipping_order.shipping.shipping_type.as_str());

        if !shipping_order.shipping.is_in_store_pickup() {
            tracing::debug!(
                shipping_order_id,
                shipping_type = %shipping_order.shipping.shipping_type,
                "Not an in-store pickup, not notifying"
            );
            return Ok(None);
        }

        let customer = self.accounts.get_account(shipping_order.customer_id).await?;
        let short_id = self.renderer.short_id(&shipping_order.order_id);
        let message = self.renderer.render(
            messages::SHIPPING_READY_FOR_PICKUP,
            &customer.language,
            &[&short_id],
        );
        deliver(self.sms.as_ref(), &customer, message).await
    }
}
