//! # storefront-client
//!
//! Leptos + WASM storefront UI. Renders the collection showcase from the
//! storefront REST API, falling back to bundled content when live data is
//! missing or unavailable.
//!
//! This crate contains pages, components, application state, the configured
//! HTTP client, and network types. The root `storefront` binary hosts the SSR
//! render; the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
