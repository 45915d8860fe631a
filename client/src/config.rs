//! API endpoint configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so the API base URL
//! is captured from `STOREFRONT_API_URL` when the crate is compiled. SSR and
//! tests can build a config from an explicit value instead.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `STOREFRONT_API_URL` is unset or blank.
pub const DEFAULT_API_BASE_URL: &str = "https://my-backend-pcyj.onrender.com/api";

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Resolved API configuration shared by the HTTP client and image resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub with_credentials: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_base_url(None)
    }
}

impl ApiConfig {
    /// Build config from the compile-time `STOREFRONT_API_URL` value.
    pub fn from_env() -> Self {
        Self::from_base_url(option_env!("STOREFRONT_API_URL"))
    }

    /// Build config from an optional base URL. Blank values use the default
    /// and trailing slashes are trimmed.
    pub fn from_base_url(raw: Option<&str>) -> Self {
        let base_url = raw
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { base_url, with_credentials: true }
    }

    /// Absolute URL for an API path such as `/collections/public`.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_owned();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Origin that serves uploaded assets: the base URL without a trailing
    /// `/api` segment.
    pub fn asset_origin(&self) -> &str {
        self.base_url.strip_suffix("/api").unwrap_or(&self.base_url)
    }
}
