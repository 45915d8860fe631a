//! Configured HTTP client for the storefront API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every API call goes through `ApiClient`, which:
//! - resolves paths against the configured base URL,
//! - sends `Content-Type: application/json` and credentials on every call,
//! - attaches `Authorization: Bearer <token>` when the token store has one,
//! - on a 401 clears the stored token and publishes an `UnauthorizedEvent`,
//!   then hands the original error back to the caller.
//!
//! There is no retry, backoff, or circuit breaking.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::transport::{HttpMethod, HttpRequest, HttpResponse, Transport, default_transport};
use super::unauthorized::{UnauthorizedBus, UnauthorizedEvent};
use crate::config::ApiConfig;
use crate::util::storage::{LocalStorageTokenStore, TokenStore};

/// Cheap-to-clone handle shared through Leptos context.
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<ApiConfig>,
    transport: Arc<dyn Transport>,
    tokens: Arc<dyn TokenStore>,
    unauthorized: UnauthorizedBus,
}

impl ApiClient {
    pub fn new(
        config: ApiConfig,
        transport: Arc<dyn Transport>,
        tokens: Arc<dyn TokenStore>,
        unauthorized: UnauthorizedBus,
    ) -> Self {
        Self { config: Arc::new(config), transport, tokens, unauthorized }
    }

    /// Client for the current target: `fetch` + `localStorage` in the
    /// browser, unavailable transport elsewhere.
    pub fn browser(config: ApiConfig) -> Self {
        Self::new(
            config,
            default_transport(),
            Arc::new(LocalStorageTokenStore::default()),
            UnauthorizedBus::new(),
        )
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn tokens(&self) -> &dyn TokenStore {
        self.tokens.as_ref()
    }

    /// Bus that receives an event for every 401 response.
    pub fn unauthorized(&self) -> &UnauthorizedBus {
        &self.unauthorized
    }

    /// Send a request and map non-2xx statuses to [`ApiError::Status`].
    ///
    /// # Errors
    ///
    /// Returns the transport error, or [`ApiError::Status`] for non-2xx
    /// responses. A 401 additionally clears the token and notifies
    /// subscribers before the error is returned.
    pub async fn send(&self, method: HttpMethod, path: &str, body: Option<String>) -> Result<HttpResponse, ApiError> {
        let request = self.attach_auth(self.build_request(method, path, body));
        let outcome = self.transport.send(request).await.and_then(|resp| {
            if resp.ok() {
                Ok(resp)
            } else {
                Err(ApiError::Status { status: resp.status, body: resp.body })
            }
        });
        self.inspect_outcome(outcome)
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn get(&self, path: &str) -> Result<HttpResponse, ApiError> {
        self.send(HttpMethod::Get, path, None).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn delete(&self, path: &str) -> Result<HttpResponse, ApiError> {
        self.send(HttpMethod::Delete, path, None).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if `body` cannot be serialized, otherwise
    /// see [`ApiClient::send`].
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<HttpResponse, ApiError> {
        self.send(HttpMethod::Post, path, Some(encode_body(body)?)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::post`].
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<HttpResponse, ApiError> {
        self.send(HttpMethod::Put, path, Some(encode_body(body)?)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::post`].
    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<HttpResponse, ApiError> {
        self.send(HttpMethod::Patch, path, Some(encode_body(body)?)).await
    }

    /// GET `path` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`]; also [`ApiError::Decode`] for malformed bodies.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.get(path).await?.json()
    }

    fn build_request(&self, method: HttpMethod, path: &str, body: Option<String>) -> HttpRequest {
        let mut request = HttpRequest::new(method, self.config.endpoint(path));
        request.set_header("Content-Type", "application/json");
        request.with_credentials = self.config.with_credentials;
        request.body = body;
        request
    }

    /// Outbound step: bearer token from the token store.
    fn attach_auth(&self, mut request: HttpRequest) -> HttpRequest {
        if let Some(token) = self.tokens.token() {
            request.set_header("Authorization", format!("Bearer {token}"));
        }
        request
    }

    /// Inbound step: invalidate the session on 401, pass everything through.
    fn inspect_outcome(&self, outcome: Result<HttpResponse, ApiError>) -> Result<HttpResponse, ApiError> {
        if let Err(err) = &outcome {
            if err.is_unauthorized() {
                log::warn!("unauthorized response; clearing stored token");
                self.tokens.clear_token();
                self.unauthorized.notify(UnauthorizedEvent { status: 401 });
            }
        }
        outcome
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}
