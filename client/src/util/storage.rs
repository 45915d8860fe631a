//! Token storage port and its `localStorage` implementation.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ApiClient` reads the bearer token before every request and clears it on
//! 401. Going through `TokenStore` keeps that lifecycle testable without a
//! browser; the login flow that writes the token lives outside this crate.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::sync::{Mutex, PoisonError};

use crate::config::TOKEN_STORAGE_KEY;

/// Persistent holder of the auth token.
pub trait TokenStore: Send + Sync {
    /// Stored token, if any. Blank values count as absent.
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str);
    fn clear_token(&self);
}

/// Token store backed by browser `localStorage`. No-op outside the browser.
#[derive(Clone, Copy, Debug)]
pub struct LocalStorageTokenStore {
    key: &'static str,
}

impl Default for LocalStorageTokenStore {
    fn default() -> Self {
        Self { key: TOKEN_STORAGE_KEY }
    }
}

impl LocalStorageTokenStore {
    pub fn with_key(key: &'static str) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalStorageTokenStore {
    fn token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?.get_item(self.key).ok().flatten()?;
            non_blank(raw)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set_token(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if storage.set_item(self.key, token).is_err() {
                log::warn!("failed to persist auth token");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::trace!("no browser storage; discarding {}-byte token", token.len());
        }
    }

    fn clear_token(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if storage.remove_item(self.key).is_err() {
                log::warn!("failed to clear auth token");
            }
        }
    }
}

/// In-process token store for SSR, embedding, and tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self { slot: Mutex::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        let slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        slot.clone().and_then(non_blank)
    }

    fn set_token(&self, token: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear_token(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

fn non_blank(raw: String) -> Option<String> {
    if raw.trim().is_empty() { None } else { Some(raw) }
}
