//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront surfaces from view models computed in
//! `state`; pages own data loading.

pub mod collection_tile;
