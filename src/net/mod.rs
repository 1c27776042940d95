//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` owns credential attachment and the token-refresh lifecycle,
//! `api` maps endpoints to typed operations, and `types` defines the wire
//! schema.

pub mod api;
pub mod client;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
