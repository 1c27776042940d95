//! Application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` holds the per-tab session state provided via context; `session`
//! drives its transitions over the API client.

pub mod auth;
pub mod session;
