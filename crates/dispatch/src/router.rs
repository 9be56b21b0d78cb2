//! Event-type URN → notifier routing.

use std::collections::HashMap;
use std::sync::Arc;

use herald_core::models::TransactionType;
use herald_events::payload::{OrderEventPayload, ShippingOrderEventPayload, TransactionEventPayload};
use herald_events::{urn, EventContext, InboundEvent};
use serde::de::DeserializeOwned;
use tracing::field::Empty;
use tracing::{Instrument, Span};

use crate::error::{DispatchError, DispatchResult};
use crate::order::OrderNotifier;
use crate::outcome::NotificationOutcome;
use crate::payment::PaymentNotifier;
use crate::shipping::ShippingNotifier;

/// Event types this service reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    TransactionSuccessful,
    OrderOpened,
    OrderCancelled,
    OrderReadyForPickup,
    ShippingReadyForPickup,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::TransactionSuccessful,
        Route::OrderOpened,
        Route::OrderCancelled,
        Route::OrderReadyForPickup,
        Route::ShippingReadyForPickup,
    ];

    pub fn urn(&self) -> &'static str {
        match self {
            Self::TransactionSuccessful => urn::TRANSACTION_SUCCESSFUL,
            Self::OrderOpened => urn::ORDER_OPENED,
            Self::OrderCancelled => urn::ORDER_CANCELLED,
            Self::OrderReadyForPickup => urn::ORDER_READY_FOR_PICKUP,
            Self::ShippingReadyForPickup => urn::SHIPPING_READY_FOR_PICKUP,
        }
    }
}

/// Decodes inbound events and hands them to the matching notifier.
pub struct EventRouter {
    routes: HashMap<&'static str, Route>,
    payment: Arc<PaymentNotifier>,
    order: Arc<OrderNotifier>,
    shipping: Arc<ShippingNotifier>,
}

impl EventRouter {
    pub fn new(
        payment: Arc<PaymentNotifier>,
        order: Arc<OrderNotifier>,
        shipping: Arc<ShippingNotifier>,
    ) -> Self {
        let routes = Route::ALL.into_iter().map(|r| (r.urn(), r)).collect();
        Self {
            routes,
            payment,
            order,
            shipping,
        }
    }

    pub fn route_for(&self, event_type: &str) -> Option<Route> {
        self.routes.get(event_type).copied()
    }

    /// Dispatch one event.
    ///
    /// Unknown event types and policy skips return
    /// [`NotificationOutcome::skipped`]. Every error propagates so the
    /// consumer can redeliver or dead-letter the event.
    pub async fn dispatch(
        &self,
        event: &InboundEvent,
        ctx: &EventContext,
    ) -> DispatchResult<NotificationOutcome> {
        let span = tracing::info_span!(
            "dispatch",
            event_type = %event.event_type,
            trace_id = ctx.trace_id.as_deref(),
            tenant_id = ctx.tenant_id,
            transaction_id = Empty,
            transaction_type = Empty,
            order_id = Empty,
            shipping_order_id = Empty,
            shipping_id = Empty,
            shipping_type = Empty,
            sender_id = Empty,
            recipient_id = Empty,
            merchant_id = Empty,
            customer_id = Empty,
            amount = Empty,
            net = Empty,
            message_id = Empty,
            outcome = Empty,
        );

        let result = self.route(event, ctx).instrument(span.clone()).await;

        span.in_scope(|| match &result {
            Ok(outcome) if outcome.is_sent() => {
                Span::current().record("outcome", "sent");
                tracing::info!("Notification sent");
            }
            Ok(_) => {
                Span::current().record("outcome", "skipped");
                tracing::info!("No notification for event");
            }
            Err(e) => {
                Span::current().record("outcome", "failed");
                tracing::error!(error = %e, "Failed to dispatch event");
            }
        });

        result
    }

    async fn route(
        &self,
        event: &InboundEvent,
        ctx: &EventContext,
    ) -> DispatchResult<NotificationOutcome> {
        let Some(route) = self.route_for(&event.event_type) else {
            tracing::debug!("Unsupported event type, ignoring");
            return Ok(NotificationOutcome::skipped());
        };

        let message_id = match route {
            Route::TransactionSuccessful => {
                let payload: TransactionEventPayload = decode(event)?;
                self.on_transaction_successful(&payload, ctx).await?
            }
            Route::OrderOpened => {
                let payload: OrderEventPayload = decode(event)?;
                Span::current().record("order_id", payload.order_id.as_str());
                self.order.on_order_opened(&payload.order_id, ctx).await?
            }
            Route::OrderCancelled => {
                let payload: OrderEventPayload = decode(event)?;
                Span::current().record("order_id", payload.order_id.as_str());
                self.order.on_order_cancelled(&payload.order_id, ctx).await?
            }
            Route::OrderReadyForPickup => {
                let payload: OrderEventPayload = decode(event)?;
                Span::current().record("order_id", payload.order_id.as_str());
                self.order
                    .on_order_ready_for_pickup(&payload.order_id, ctx)
                    .await?
            }
            Route::ShippingReadyForPickup => {
                let payload: ShippingOrderEventPayload = decode(event)?;
                Span::current().record("shipping_order_id", payload.shipping_order_id);
                self.shipping
                    .on_shipping_ready_for_pickup(payload.shipping_order_id, ctx)
                    .await?
            }
        };

        Ok(message_id.into())
    }

    async fn on_transaction_successful(
        &self,
        payload: &TransactionEventPayload,
        ctx: &EventContext,
    ) -> DispatchResult<Option<String>> {
        let span = Span::current();
        span.record("transaction_id", payload.transaction_id.as_str());
        span.record("transaction_type", payload.transaction_type.as_str());

        // A tenant stamped on the payload wins over the delivery context.
        let ctx = match payload.tenant_id.filter(|id| *id > 0) {
            Some(tenant_id) => {
                span.record("tenant_id", tenant_id);
                ctx.clone().with_tenant(tenant_id)
            }
            None => ctx.clone(),
        };

        let id = payload.transaction_id.as_str();
        match payload.kind() {
            TransactionType::Transfer => self.payment.on_transfer_successful(id, &ctx).await,
            TransactionType::Charge => self.payment.on_charge_successful(id, &ctx).await,
            TransactionType::Cashin => self.payment.on_cashin_successful(id, &ctx).await,
            TransactionType::Cashout => self.payment.on_cashout_successful(id, &ctx).await,
            TransactionType::Payment | TransactionType::Unknown => {
                tracing::debug!("Transaction type is not notifiable");
                Ok(None)
            }
        }
    }
}

fn decode<T: DeserializeOwned>(event: &InboundEvent) -> DispatchResult<T> {
    event
        .decode()
        .map_err(|source| DispatchError::MalformedPayload {
            event_type: event.event_type.clone(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use assert_matches::assert_matches;
    use herald_core::models::{Order, Transaction};
    use serde_json::json;

    use super::*;
    use crate::ports::{MockOrderApi, MockPaymentApi, MockShippingApi, MockSmsGateway};
    use crate::testing::{account, accounts, phone_of, renderer, sms_expecting, sms_never, tenants};

    fn transaction(kind: TransactionType) -> Transaction {
        Transaction {
            id: "tx-1".to_string(),
            kind,
            account_id: 11,
            recipient_id: Some(1),
            order_id: None,
            amount: 5100.0,
            net: 5000.0,
            currency: Some("XAF".to_string()),
        }
    }

    fn router(payments: MockPaymentApi, orders: MockOrderApi, sms: MockSmsGateway) -> EventRouter {
        let accounts = Arc::new(accounts(vec![
            account(1, "Roger Milla", "en"),
            account(11, "Ray Sponsible", "en"),
        ]));
        let sms = Arc::new(sms);
        let shipping = Arc::new(MockShippingApi::new());
        let tenants = tenants();
        let renderer = renderer();

        EventRouter::new(
            Arc::new(PaymentNotifier::new(
                Arc::new(payments),
                accounts.clone(),
                tenants.clone(),
                renderer.clone(),
                sms.clone(),
            )),
            Arc::new(OrderNotifier::new(
                Arc::new(orders),
                accounts.clone(),
                shipping.clone(),
                tenants,
                renderer.clone(),
                sms.clone(),
            )),
            Arc::new(ShippingNotifier::new(shipping, accounts, renderer, sms)),
        )
    }

    fn payments_returning(tx: Transaction) -> MockPaymentApi {
        let mut api = MockPaymentApi::new();
        api.expect_get_transaction()
            .returning(move |_| Ok(tx.clone()));
        api
    }

    fn transaction_event(kind: &str, tenant_id: Option<i64>) -> InboundEvent {
        InboundEvent::new(
            urn::TRANSACTION_SUCCESSFUL,
            json!({
                "transactionId": "tx-1",
                "type": kind,
                "accountId": 11,
                "recipientId": 1,
                "amount": 5100.0,
                "net": 5000.0,
                "currency": "XAF",
                "tenantId": tenant_id,
            })
            .to_string(),
        )
    }

    #[test]
    fn route_table_is_complete_and_unique() {
        let router = router(MockPaymentApi::new(), MockOrderApi::new(), sms_never());
        let urns: HashSet<_> = Route::ALL.iter().map(Route::urn).collect();

        assert_eq!(urns.len(), Route::ALL.len());
        for route in Route::ALL {
            assert_eq!(router.route_for(route.urn()), Some(route));
        }
        assert_eq!(router.route_for("urn:event:order:order-closed"), None);
    }

    #[tokio::test]
    async fn unknown_event_type_is_skipped() {
        let router = router(MockPaymentApi::new(), MockOrderApi::new(), sms_never());
        let event = InboundEvent::new("urn:event:foo:bar", "not even json");

        let outcome = router.dispatch(&event, &EventContext::new()).await.unwrap();

        assert_eq!(outcome, NotificationOutcome::skipped());
    }

    #[tokio::test]
    async fn malformed_payload_is_an_error() {
        let router = router(MockPaymentApi::new(), MockOrderApi::new(), sms_never());
        let event = InboundEvent::new(urn::ORDER_CANCELLED, "{\"id\": 1}");

        assert_matches!(
            router.dispatch(&event, &EventContext::new()).await,
            Err(DispatchError::MalformedPayload { event_type, .. }) if event_type == urn::ORDER_CANCELLED
        );
    }

    #[tokio::test]
    async fn transfer_event_is_delivered() {
        let router = router(
            payments_returning(transaction(TransactionType::Transfer)),
            MockOrderApi::new(),
            sms_expecting(&phone_of(1), "You have received 5,000 XAF from Ray Sponsible"),
        );

        let outcome = router
            .dispatch(&transaction_event("TRANSFER", Some(1)), &EventContext::new())
            .await
            .unwrap();

        assert_eq!(outcome, NotificationOutcome::sent("xxxx"));
    }

    #[tokio::test]
    async fn context_tenant_is_used_when_payload_has_none() {
        let router = router(
            payments_returning(transaction(TransactionType::Transfer)),
            MockOrderApi::new(),
            sms_expecting(&phone_of(1), "You have received 5,000 XAF from Ray Sponsible"),
        );
        let ctx = EventContext::new().with_tenant(1).with_trace_id("trace-1");

        let outcome = router
            .dispatch(&transaction_event("TRANSFER", None), &ctx)
            .await
            .unwrap();

        assert!(outcome.is_sent());
    }

    #[tokio::test]
    async fn non_notifiable_transaction_types_never_send() {
        for kind in ["PAYMENT", "REFUND", ""] {
            let mut payments = MockPaymentApi::new();
            payments.expect_get_transaction().never();
            let router = router(payments, MockOrderApi::new(), sms_never());

            let outcome = router
                .dispatch(&transaction_event(kind, Some(1)), &EventContext::new())
                .await
                .unwrap();

            assert_eq!(outcome, NotificationOutcome::skipped(), "type {kind:?}");
        }
    }

    #[tokio::test]
    async fn order_cancelled_event_is_delivered() {
        let mut orders = MockOrderApi::new();
        orders.expect_get_order().returning(|id| {
            Ok(Order {
                id: id.to_string(),
                account_id: 1,
                merchant_id: 11,
                total_price: 5100.0,
                currency: None,
                shipping_id: None,
                tenant_id: None,
            })
        });
        let router = router(
            MockPaymentApi::new(),
            orders,
            sms_expecting(&phone_of(1), "Your order #3094 has been cancelled"),
        );
        let event = InboundEvent::new(urn::ORDER_CANCELLED, r#"{"orderId":"39043094"}"#);

        let outcome = router.dispatch(&event, &EventContext::new()).await.unwrap();

        assert_eq!(outcome.message_id.as_deref(), Some("xxxx"));
    }

    // -- correlation fields ----------------------------------------------------

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    /// Dispatch `event` under a plain-text subscriber and return its output.
    async fn dispatch_logged(router: &EventRouter, event: &InboundEvent) -> String {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let _ = router.dispatch(event, &EventContext::new().with_trace_id("trace-7")).await;

        buffer.contents()
    }

    fn has_field(logs: &str, name: &str, value: &str) -> bool {
        logs.contains(&format!("{name}={value}")) || logs.contains(&format!("{name}=\"{value}\""))
    }

    #[tokio::test]
    async fn sent_dispatch_records_message_id_and_outcome() {
        let router = router(
            payments_returning(transaction(TransactionType::Transfer)),
            MockOrderApi::new(),
            sms_expecting(&phone_of(1), "You have received 5,000 XAF from Ray Sponsible"),
        );

        let logs = dispatch_logged(&router, &transaction_event("TRANSFER", Some(1))).await;

        assert!(logs.contains("Notification sent"), "{logs}");
        assert!(has_field(&logs, "outcome", "sent"), "{logs}");
        assert!(has_field(&logs, "message_id", "xxxx"), "{logs}");
        assert!(has_field(&logs, "trace_id", "trace-7"), "{logs}");
        assert!(has_field(&logs, "transaction_id", "tx-1"), "{logs}");
    }

    #[tokio::test]
    async fn skipped_dispatch_records_outcome() {
        let router = router(MockPaymentApi::new(), MockOrderApi::new(), sms_never());

        let logs = dispatch_logged(&router, &InboundEvent::new("urn:event:foo:bar", "{}")).await;

        assert!(logs.contains("No notification for event"), "{logs}");
        assert!(has_field(&logs, "outcome", "skipped"), "{logs}");
        assert!(!logs.contains("message_id="), "{logs}");
    }

    #[tokio::test]
    async fn failed_dispatch_records_outcome_and_error() {
        let mut sms = MockSmsGateway::new();
        sms.expect_send_message().times(1).returning(|_| {
            Err(herald_core::CoreError::Status {
                service: "sms",
                status: 503,
            })
        });
        let router = router(
            payments_returning(transaction(TransactionType::Transfer)),
            MockOrderApi::new(),
            sms,
        );

        let logs = dispatch_logged(&router, &transaction_event("TRANSFER", Some(1))).await;

        assert!(logs.contains("Failed to dispatch event"), "{logs}");
        assert!(has_field(&logs, "outcome", "failed"), "{logs}");
        assert!(logs.contains("error="), "{logs}");
    }

    #[tokio::test]
    async fn upstream_failures_propagate() {
        let mut orders = MockOrderApi::new();
        orders.expect_get_order().returning(|id| {
            Err(herald_core::CoreError::NotFound {
                entity: "order",
                id: id.to_string(),
            })
        });
        let router = router(MockPaymentApi::new(), orders, sms_never());
        let event = InboundEvent::new(urn::ORDER_OPENED, r#"{"orderId":"39043094"}"#);

        assert_matches!(
            router.dispatch(&event, &EventContext::new()).await,
            Err(DispatchError::Core(herald_core::CoreError::NotFound { entity: "order", .. }))
        );
    }
}
