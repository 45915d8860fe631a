//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `collections`) so individual components
//! can depend on small focused models. `fallback` holds the bundled content
//! the showcase falls back to.

pub mod auth;
pub mod collections;
pub mod fallback;
