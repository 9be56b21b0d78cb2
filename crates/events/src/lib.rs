//! Inbound event contract of the notification service.
//!
//! - [`InboundEvent`]: the `{type, payload}` envelope received from the bus.
//! - [`EventContext`]: tracing context delivered alongside an event.
//! - [`urn`]: event-type URNs this service reacts to.
//! - [`payload`]: payload schemas bound to those URNs.

pub mod envelope;
pub mod payload;
pub mod urn;

pub use envelope::{EventContext, InboundEvent};
pub use payload::{OrderEventPayload, ShippingOrderEventPayload, TransactionEventPayload};
