//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the token store and the client's 401 notifications into a signal
//! so identity-aware components can react without polling storage.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::unauthorized::UnauthorizedEvent;
use crate::util::storage::TokenStore;

/// Authentication state provided via context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    /// A bearer token was present when last checked.
    pub has_token: bool,
    /// Status of the most recent rejection, cleared on re-login.
    pub unauthorized_status: Option<u16>,
}

impl AuthState {
    pub fn from_store(tokens: &dyn TokenStore) -> Self {
        Self { has_token: tokens.token().is_some(), unauthorized_status: None }
    }

    pub fn apply_unauthorized(&mut self, event: &UnauthorizedEvent) {
        self.has_token = false;
        self.unauthorized_status = Some(event.status);
    }

    pub fn apply_login(&mut self) {
        self.has_token = true;
        self.unauthorized_status = None;
    }

    /// True once the server has rejected the stored credentials.
    pub fn session_expired(&self) -> bool {
        self.unauthorized_status.is_some()
    }
}
