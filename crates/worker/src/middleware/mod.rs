//! Request extractors guarding operator endpoints.
//!
//! - [`auth::AdminKey`] -- Requires the configured `API_KEY` in `X-Api-Key`.

pub mod auth;
