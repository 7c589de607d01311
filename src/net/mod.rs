//! Networking modules for the auth service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls, `error` normalizes their failures, and
//! `types` defines the wire schema.

pub mod api;
pub mod error;
#[cfg(test)]
pub(crate) mod testing;
pub mod types;
