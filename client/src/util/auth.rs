//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wires the API client's 401 notifications into the reactive auth state for
//! the lifetime of the current reactive owner.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::client::ApiClient;
use crate::state::auth::AuthState;

/// Subscribe `auth` to unauthorized events from `client`. The subscription is
/// released when the owning scope is cleaned up.
pub fn install_unauthorized_listener(client: &ApiClient, auth: RwSignal<AuthState>) {
    let subscription = client.unauthorized().subscribe(move |event| {
        log::info!("session rejected with status {}", event.status);
        auth.update(|state| state.apply_unauthorized(event));
    });
    on_cleanup(move || drop(subscription));
}
