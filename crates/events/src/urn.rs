//! Event-type URNs published by the payment, order and shipping services.
//!
//! These must match the `type` values the producers put on the bus.

/// A payment transaction settled successfully (any transaction kind).
pub const TRANSACTION_SUCCESSFUL: &str = "urn:event:payment:transaction-successful";

/// A customer opened a new order.
pub const ORDER_OPENED: &str = "urn:event:order:order-opened";

/// An order was cancelled.
pub const ORDER_CANCELLED: &str = "urn:event:order:order-cancelled";

/// An order is ready to be collected by the customer.
pub const ORDER_READY_FOR_PICKUP: &str = "urn:event:order:order-ready-for-pickup";

/// A shipping order is ready to be collected by the customer.
pub const SHIPPING_READY_FOR_PICKUP: &str = "urn:event:shipping:shipping-ready-for-pickup";
