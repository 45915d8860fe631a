//! REST endpoints consumed by the storefront pages.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed listing degrades
//! to fallback content rather than breaking hydration.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::client::ApiClient;
use super::error::ApiError;
use super::types::{Collection, CollectionListEnvelope};

/// Path of the public collection listing, relative to the API base URL.
pub const PUBLIC_COLLECTIONS_PATH: &str = "/collections/public";

/// Fetch the public collection list from `/collections/public`.
///
/// A response without `data.collections` yields an empty list.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the server responds with a
/// non-2xx status, or the body is not JSON.
pub async fn list_public_collections(client: &ApiClient) -> Result<Vec<Collection>, ApiError> {
    let envelope: CollectionListEnvelope = client.get_json(PUBLIC_COLLECTIONS_PATH).await?;
    Ok(envelope.into_collections())
}
