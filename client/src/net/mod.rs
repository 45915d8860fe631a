//! Networking modules for the storefront REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` wraps every call with auth and 401 handling, `transport` is the
//! HTTP seam underneath it, `api` holds endpoint helpers, `cancel` provides
//! abortable request handles, and `types` defines the wire schema.

pub mod api;
pub mod cancel;
pub mod client;
pub mod error;
pub mod transport;
pub mod types;
pub mod unauthorized;

#[cfg(test)]
pub(crate) mod test_support;
