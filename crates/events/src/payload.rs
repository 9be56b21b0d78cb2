//! Payload schemas bound to each event type.

use herald_core::models::TransactionType;
use herald_core::types::{AccountId, OrderId, ShippingId, TenantId, TransactionId};
use serde::{Deserialize, Serialize};

/// Payload of [`TRANSACTION_SUCCESSFUL`](crate::urn::TRANSACTION_SUCCESSFUL).
///
/// Only the id and type are required; the snapshot fields are informational
/// and the notifiers always re-fetch the transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEventPayload {
    pub transaction_id: TransactionId,
    #[serde(rename = "type")]
    pub transaction_type: String,
    #[serde(default)]
    pub account_id: AccountId,
    #[serde(default)]
    pub recipient_id: Option<AccountId>,
    #[serde(default)]
    pub order_id: Option<OrderId>,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub net: f64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub tenant_id: Option<TenantId>,
}

impl TransactionEventPayload {
    pub fn kind(&self) -> TransactionType {
        TransactionType::from_name(&self.transaction_type)
    }
}

/// Payload of the order lifecycle events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderEventPayload {
    pub order_id: OrderId,
}

/// Payload of [`SHIPPING_READY_FOR_PICKUP`](crate::urn::SHIPPING_READY_FOR_PICKUP).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingOrderEventPayload {
    pub shipping_order_id: ShippingId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_transaction_payload_decodes() {
        let payload: TransactionEventPayload = serde_json::from_str(
            r#"{"transactionId":"320930293029302","type":"TRANSFER"}"#,
        )
        .unwrap();

        assert_eq!(payload.kind(), TransactionType::Transfer);
        assert!(payload.tenant_id.is_none());
        assert!(payload.recipient_id.is_none());
    }

    #[test]
    fn full_transaction_payload_decodes() {
        let payload: TransactionEventPayload = serde_json::from_value(serde_json::json!({
            "transactionId": "tx-1",
            "type": "CHARGE",
            "accountId": 11,
            "recipientId": 1,
            "orderId": "39043094",
            "amount": 5100.0,
            "net": 5000.0,
            "currency": "XAF",
            "tenantId": 1,
        }))
        .unwrap();

        assert_eq!(payload.kind(), TransactionType::Charge);
        assert_eq!(payload.order_id.as_deref(), Some("39043094"));
        assert_eq!(payload.tenant_id, Some(1));
    }

    #[test]
    fn shipping_payload_requires_numeric_id() {
        assert!(serde_json::from_str::<ShippingOrderEventPayload>(r#"{"shippingOrderId":"x"}"#)
            .is_err());
        let ok: ShippingOrderEventPayload =
            serde_json::from_str(r#"{"shippingOrderId":111}"#).unwrap();
        assert_eq!(ok.shipping_order_id, 111);
    }
}
