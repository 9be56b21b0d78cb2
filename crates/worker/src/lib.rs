//! SMS notification worker.
//!
//! Exposes configuration, state wiring, error mapping and routes so the
//! integration tests and the binary entrypoint share them.

pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
