//! Records fetched from the platform services.
//!
//! Field names follow the camelCase JSON the services emit. Everything here is
//! read-only input for the notifiers; nothing is persisted.

use serde::{Deserialize, Serialize};

use crate::types::{AccountId, OrderId, ShippingId, TenantId, TransactionId};

/// Shipping type value for in-store pickup fulfilment.
pub const IN_STORE_PICKUP: &str = "IN_STORE_PICKUP";

fn default_language() -> String {
    "en".to_string()
}

// ---------------------------------------------------------------------------
// Account
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: AccountId,
    #[serde(default)]
    pub display_name: Option<String>,
    /// ISO language tag used to pick the message bundle.
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub phone: Option<Phone>,
}

impl Account {
    /// Display name, or an empty string for accounts that never set one.
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or_default()
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone.as_ref().map(|p| p.number.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tenant
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: TenantId,
    /// Decimal-format pattern, e.g. `#,###,##0 XAF`.
    pub monetary_format: String,
    #[serde(default)]
    pub webapp_url: String,
}

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// Kind of a payment transaction.
///
/// Unrecognised values decode to [`TransactionType::Unknown`] so a new kind
/// on the payment side never breaks decoding here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Transfer,
    Charge,
    Cashin,
    Cashout,
    Payment,
    #[serde(other)]
    Unknown,
}

impl TransactionType {
    /// Parse the wire name (`TRANSFER`, `CHARGE`, ...). Matching is exact.
    pub fn from_name(name: &str) -> Self {
        match name {
            "TRANSFER" => Self::Transfer,
            "CHARGE" => Self::Charge,
            "CASHIN" => Self::Cashin,
            "CASHOUT" => Self::Cashout,
            "PAYMENT" => Self::Payment,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transfer => "TRANSFER",
            Self::Charge => "CHARGE",
            Self::Cashin => "CASHIN",
            Self::Cashout => "CASHOUT",
            Self::Payment => "PAYMENT",
            Self::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub account_id: AccountId,
    #[serde(default)]
    pub recipient_id: Option<AccountId>,
    #[serde(default)]
    pub order_id: Option<OrderId>,
    pub amount: f64,
    pub net: f64,
    #[serde(default)]
    pub currency: Option<String>,
}

// ---------------------------------------------------------------------------
// Order / shipping
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    /// The customer who placed the order.
    pub account_id: AccountId,
    pub merchant_id: AccountId,
    pub total_price: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub shipping_id: Option<ShippingId>,
    #[serde(default)]
    pub tenant_id: Option<TenantId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipping {
    #[serde(default)]
    pub id: ShippingId,
    #[serde(rename = "type")]
    pub shipping_type: String,
}

impl Shipping {
    pub fn is_in_store_pickup(&self) -> bool {
        self.shipping_type.eq_ignore_ascii_case(IN_STORE_PICKUP)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingOrder {
    #[serde(default)]
    pub id: ShippingId,
    pub customer_id: AccountId,
    pub order_id: OrderId,
    pub shipping: Shipping,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_decodes_camel_case_with_defaults() {
        let account: Account = serde_json::from_value(serde_json::json!({
            "id": 11,
            "displayName": "Ray Sponsible",
        }))
        .unwrap();

        assert_eq!(account.name(), "Ray Sponsible");
        assert_eq!(account.language, "en");
        assert!(account.phone_number().is_none());
    }

    #[test]
    fn account_without_display_name_has_empty_name() {
        let account: Account = serde_json::from_value(serde_json::json!({
            "id": 1,
            "language": "fr",
            "phone": { "number": "+237695096577" },
        }))
        .unwrap();

        assert_eq!(account.name(), "");
        assert_eq!(account.phone_number(), Some("+237695096577"));
    }

    #[test]
    fn unknown_transaction_type_decodes_to_unknown() {
        let tx: Transaction = serde_json::from_value(serde_json::json!({
            "id": "320930293029302",
            "type": "REFUND",
            "accountId": 11,
            "amount": 5100.0,
            "net": 5000.0,
        }))
        .unwrap();

        assert_eq!(tx.kind, TransactionType::Unknown);
        assert!(tx.recipient_id.is_none());
    }

    #[test]
    fn transaction_type_from_name_is_exact() {
        assert_eq!(TransactionType::from_name("CASHIN"), TransactionType::Cashin);
        assert_eq!(TransactionType::from_name("cashin"), TransactionType::Unknown);
        assert_eq!(TransactionType::Cashout.as_str(), "CASHOUT");
    }

    #[test]
    fn in_store_pickup_compare_ignores_case() {
        let shipping = Shipping {
            id: 11,
            shipping_type: "in_store_pickup".to_string(),
        };
        assert!(shipping.is_in_store_pickup());

        let delivery = Shipping {
            id: 12,
            shipping_type: "LOCAL_DELIVERY".to_string(),
        };
        assert!(!delivery.is_in_store_pickup());
    }
}
