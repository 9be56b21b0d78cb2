/// Platform accounts are keyed by a 64-bit integer.
pub type AccountId = i64;

/// Tenants are keyed by a 64-bit integer.
pub type TenantId = i64;

/// Shipping methods and shipping orders share the integer key space.
pub type ShippingId = i64;

/// Transactions are opaque string identifiers issued by the payment service.
pub type TransactionId = String;

/// Orders are opaque string identifiers issued by the order service.
pub type OrderId = String;
