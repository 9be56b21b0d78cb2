//! Event-to-SMS dispatch engine.
//!
//! An inbound event is routed by its type URN ([`router`]), enriched by one
//! of the domain notifiers ([`payment`], [`order`], [`shipping`]), composed
//! into localized text ([`render`]) and sent through the [`ports::SmsGateway`].
//! All I/O goes through the traits in [`ports`].

mod delivery;
pub mod error;
pub mod messages;
pub mod order;
pub mod outcome;
pub mod payment;
pub mod ports;
pub mod render;
pub mod router;
pub mod shipping;
pub mod tenant;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{DispatchError, DispatchResult};
pub use order::OrderNotifier;
pub use outcome::NotificationOutcome;
pub use payment::PaymentNotifier;
pub use render::{Catalog, MessageRenderer};
pub use router::{EventRouter, Route};
pub use shipping::ShippingNotifier;
pub use tenant::TenantProvider;
