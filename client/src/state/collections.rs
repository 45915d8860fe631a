//! Collection showcase state and card mapping.
//!
//! DESIGN
//! ======
//! Live collections are mapped into `CollectionCard`s field by field. Any
//! field the server leaves out is borrowed from the paired fallback card
//! (`fallback[i mod N]`), so partial data still renders a complete card and
//! the visual pairing between slots stays stable across loads.

#[cfg(test)]
#[path = "collections_test.rs"]
mod collections_test;

use super::fallback::{DEFAULT_PLACEHOLDER_IMAGE, fallback_cards};
use crate::net::error::ApiError;
use crate::net::types::Collection;
use crate::util::image::resolve_image_url;

pub const DEFAULT_ACCENT: &str = "#0ea5e9";
pub const DEFAULT_TAGLINE: &str = "Fresh drop";

/// View model for one showcase tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionCard {
    pub id: String,
    pub handle: String,
    pub title: String,
    pub image: String,
    pub tagline: String,
    pub accent: String,
}

impl CollectionCard {
    /// Detail route this card navigates to.
    pub fn route(&self) -> String {
        collection_route(&self.handle)
    }

    pub fn aria_label(&self) -> String {
        format!("{}: {}", self.title, self.tagline)
    }
}

/// `/collection/<handle>`.
pub fn collection_route(handle: &str) -> String {
    format!("/collection/{handle}")
}

/// Fallback card paired with live collection `index`.
pub fn paired_fallback(fallback: &[CollectionCard], index: usize) -> Option<&CollectionCard> {
    if fallback.is_empty() {
        return None;
    }
    fallback.get(index % fallback.len())
}

/// Map one live collection, filling gaps from its paired fallback card.
pub fn card_from_collection(
    item: &Collection,
    index: usize,
    fallback: &[CollectionCard],
    asset_origin: &str,
) -> CollectionCard {
    let paired = paired_fallback(fallback, index);

    let image = resolve_image_url(item.hero_image.as_deref(), asset_origin)
        .or_else(|| paired.map(|card| card.image.clone()))
        .unwrap_or_else(|| DEFAULT_PLACEHOLDER_IMAGE.to_owned());

    CollectionCard {
        id: item
            .id
            .clone()
            .or_else(|| item.handle.clone())
            .unwrap_or_else(|| format!("c-{index}")),
        // No `_id` step: a handle-less collection links to its paired fallback's route.
        handle: fill(item.handle.as_ref(), paired.map(|card| &card.handle), &index.to_string()),
        title: fill(item.title.as_ref(), paired.map(|card| &card.title), "Untitled"),
        image,
        tagline: fill(item.tagline.as_ref(), paired.map(|card| &card.tagline), DEFAULT_TAGLINE),
        accent: fill(item.accent_color.as_ref(), paired.map(|card| &card.accent), DEFAULT_ACCENT),
    }
}

fn fill(own: Option<&String>, paired: Option<&String>, default: &str) -> String {
    own.or(paired).cloned().unwrap_or_else(|| default.to_owned())
}

/// Cards for `items`, or the whole fallback set when `items` is empty.
pub fn build_cards(items: &[Collection], fallback: &[CollectionCard], asset_origin: &str) -> Vec<CollectionCard> {
    if items.is_empty() {
        return fallback.to_vec();
    }
    items
        .iter()
        .enumerate()
        .map(|(index, item)| card_from_collection(item, index, fallback, asset_origin))
        .collect()
}

/// Showcase page state: `loading -> {loaded(items) | failed(empty)}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionsState {
    pub items: Vec<Collection>,
    pub loading: bool,
}

impl Default for CollectionsState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true }
    }
}

impl CollectionsState {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Settle a load. Failures clear the list so the fallback set renders;
    /// cancelled loads leave the state untouched and return `false`.
    pub fn apply_result(&mut self, result: Result<Vec<Collection>, ApiError>) -> bool {
        match result {
            Err(ApiError::Cancelled) => return false,
            Ok(items) => {
                if items.is_empty() {
                    log::debug!("no public collections; showing fallback set");
                }
                self.items = items;
            }
            Err(err) => {
                log::warn!("collection list failed, showing fallback set: {err}");
                self.items.clear();
            }
        }
        self.loading = false;
        true
    }

    /// Skeleton tiles only while the first load is still pending.
    pub fn show_skeleton(&self) -> bool {
        self.loading && self.items.is_empty()
    }

    /// Cards to render. Never empty.
    pub fn cards(&self, asset_origin: &str) -> Vec<CollectionCard> {
        build_cards(&self.items, fallback_cards(), asset_origin)
    }
}
