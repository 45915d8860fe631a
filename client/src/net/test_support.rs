//! Scripted transport shared by networking tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::client::ApiClient;
use super::error::ApiError;
use super::transport::{HttpRequest, HttpResponse, Transport};
use super::unauthorized::UnauthorizedBus;
use crate::config::ApiConfig;
use crate::util::storage::MemoryTokenStore;

pub const TEST_BASE_URL: &str = "https://shop.test/api";

/// Replays queued outcomes in order and records every request it sees.
#[derive(Default)]
pub struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Result<HttpResponse, ApiError>>>,
    seen: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn with(outcomes: Vec<Result<HttpResponse, ApiError>>) -> Arc<Self> {
        Arc::new(Self { outcomes: Mutex::new(outcomes.into()), seen: Mutex::new(Vec::new()) })
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.seen.lock().unwrap().push(request);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_owned())))
    }
}

pub fn respond(status: u16, body: &str) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse { status, body: body.to_owned() })
}

/// Client wired to `transport` and `tokens` with a fresh bus.
pub fn client_with(transport: Arc<ScriptedTransport>, tokens: Arc<MemoryTokenStore>) -> ApiClient {
    ApiClient::new(ApiConfig::from_base_url(Some(TEST_BASE_URL)), transport, tokens, UnauthorizedBus::new())
}
