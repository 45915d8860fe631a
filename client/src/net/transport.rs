//! HTTP transport seam underneath `ApiClient`.
//!
//! Client-side (hydrate): `fetch` via `gloo-net`, with an `AbortController`
//! tied to the lifetime of the send future so dropping the future aborts the
//! browser request.
//! Server-side (SSR): a stub that reports the transport as unavailable, since
//! storefront data is only loaded in the browser.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::sync::Arc;

use async_trait::async_trait;

use super::error::ApiError;

/// Request methods exposed by the client wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully resolved outbound request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    /// Send cookies and auth on cross-origin calls.
    pub with_credentials: bool,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), headers: Vec::new(), body: None, with_credentials: false }
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Set a header, replacing any existing value with the same name.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.retain(|(key, _)| !key.eq_ignore_ascii_case(name));
        self.headers.push((name.to_owned(), value.into()));
    }
}

/// Status and body text of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body is not valid JSON for `T`.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Sends requests on behalf of `ApiClient`. Enables scripted transports in
/// tests.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    /// Send one request and return whatever the server answered, including
    /// non-2xx statuses.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when no response was received.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Transport for the current build target.
pub fn default_transport() -> Arc<dyn Transport> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(FetchTransport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(UnavailableTransport)
    }
}

/// Stub transport for SSR and native builds.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableTransport;

#[async_trait(?Send)]
impl Transport for UnavailableTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        log::debug!("transport unavailable: {} {}", request.method.as_str(), request.url);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Browser `fetch` transport.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[cfg(feature = "hydrate")]
#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        use gloo_net::http::{Method, RequestBuilder};

        let mut abort = AbortOnDrop::new()?;
        let signal = abort.controller.signal();

        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        };
        let credentials = if request.with_credentials {
            web_sys::RequestCredentials::Include
        } else {
            web_sys::RequestCredentials::SameOrigin
        };

        let mut builder = RequestBuilder::new(&request.url)
            .method(method)
            .credentials(credentials)
            .abort_signal(Some(&signal));
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let built = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let resp = built.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        abort.disarm();
        Ok(HttpResponse { status, body })
    }
}

/// Aborts the browser request if the owning future is dropped before the
/// response body has been read.
#[cfg(feature = "hydrate")]
struct AbortOnDrop {
    controller: web_sys::AbortController,
    armed: bool,
}

#[cfg(feature = "hydrate")]
impl AbortOnDrop {
    fn new() -> Result<Self, ApiError> {
        let controller =
            web_sys::AbortController::new().map_err(|e| ApiError::Transport(format!("abort controller: {e:?}")))?;
        Ok(Self { controller, armed: true })
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

#[cfg(feature = "hydrate")]
impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        if self.armed {
            log::debug!("aborting in-flight request");
            self.controller.abort();
        }
    }
}
