//! Domain records and presentation helpers shared by the notification crates.

pub mod error;
pub mod models;
pub mod money;
pub mod naming;
pub mod settlement;
pub mod types;

pub use error::{CoreError, CoreResult};
