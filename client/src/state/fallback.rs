//! Bundled fallback collections.
//!
//! DESIGN
//! ======
//! The showcase must never render an empty grid. These entries ship with the
//! bundle and back both the "no data" case and per-field gaps in live data.
//! Order matters: live collection `i` borrows from fallback card `i mod N`.

#[cfg(test)]
#[path = "fallback_test.rs"]
mod fallback_test;

use std::sync::LazyLock;

use super::collections::{CollectionCard, DEFAULT_ACCENT, DEFAULT_TAGLINE};
use crate::config::ApiConfig;
use crate::net::types::{Collection, CollectionImage};
use crate::util::image::resolve_image_url;

/// Image used when nothing better is available.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "/frames/frame-1-fixed.svg";

struct FallbackEntry {
    id: &'static str,
    handle: &'static str,
    title: &'static str,
    hero_image: Option<&'static str>,
    gallery_image: Option<&'static str>,
    tagline: Option<&'static str>,
    accent_color: Option<&'static str>,
}

/// Image paths must stay root-relative front-end assets (never `/uploads/`)
/// so they resolve the same whatever API origin a client is configured with.
const FALLBACK_COLLECTIONS: [FallbackEntry; 4] = [
    FallbackEntry {
        id: "fallback-street-frames",
        handle: "street-frames",
        title: "Street Frames",
        hero_image: Some("/frames/frame-1-fixed.svg"),
        gallery_image: None,
        tagline: Some("Built for the city"),
        accent_color: Some("#f97316"),
    },
    FallbackEntry {
        id: "fallback-summer-drop",
        handle: "summer-drop",
        title: "Summer Drop",
        hero_image: None,
        gallery_image: Some("/frames/frame-2-fixed.svg"),
        tagline: None,
        accent_color: Some("#facc15"),
    },
    FallbackEntry {
        id: "fallback-monochrome",
        handle: "monochrome",
        title: "Monochrome",
        hero_image: Some("/frames/frame-3-fixed.svg"),
        gallery_image: None,
        tagline: Some("Black and white only"),
        accent_color: None,
    },
    FallbackEntry {
        id: "fallback-retro-wave",
        handle: "retro-wave",
        title: "Retro Wave",
        hero_image: Some("/frames/frame-4-fixed.svg"),
        gallery_image: Some("/frames/frame-1-fixed.svg"),
        tagline: Some("Back to the arcade"),
        accent_color: Some("#a855f7"),
    },
];

impl FallbackEntry {
    fn to_collection(&self) -> Collection {
        Collection {
            id: Some(self.id.to_owned()),
            handle: Some(self.handle.to_owned()),
            title: Some(self.title.to_owned()),
            hero_image: self.hero_image.map(str::to_owned),
            images: self
                .gallery_image
                .map(|url| vec![CollectionImage { url: Some(url.to_owned()) }])
                .unwrap_or_default(),
            tagline: self.tagline.map(str::to_owned),
            accent_color: self.accent_color.map(str::to_owned),
        }
    }
}

static FALLBACK_CARDS: LazyLock<Vec<CollectionCard>> = LazyLock::new(|| {
    let config = ApiConfig::from_env();
    let collections: Vec<Collection> = FALLBACK_COLLECTIONS.iter().map(FallbackEntry::to_collection).collect();
    fallback_cards_from(&collections, config.asset_origin())
});

/// The process-wide fallback card set, in bundle order. Never empty.
pub fn fallback_cards() -> &'static [CollectionCard] {
    &FALLBACK_CARDS
}

/// Single placeholder swapped in when a card image fails to load.
pub fn image_error_placeholder() -> &'static str {
    fallback_cards()
        .first()
        .map_or(DEFAULT_PLACEHOLDER_IMAGE, |card| card.image.as_str())
}

/// Build fallback cards from bundled collections. Unlike live cards, fallback
/// cards may use the first gallery image when no hero image is set.
pub fn fallback_cards_from(collections: &[Collection], asset_origin: &str) -> Vec<CollectionCard> {
    collections
        .iter()
        .enumerate()
        .map(|(idx, collection)| {
            let gallery = collection.images.first().and_then(|img| img.url.as_deref());
            let image = resolve_image_url(collection.hero_image.as_deref().or(gallery), asset_origin)
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER_IMAGE.to_owned());
            let handle = collection.handle.clone().unwrap_or_else(|| format!("fallback-{idx}"));
            CollectionCard {
                id: collection.id.clone().unwrap_or_else(|| handle.clone()),
                title: collection.title.clone().unwrap_or_else(|| handle.clone()),
                handle,
                image,
                tagline: collection.tagline.clone().unwrap_or_else(|| DEFAULT_TAGLINE.to_owned()),
                accent: collection.accent_color.clone().unwrap_or_else(|| DEFAULT_ACCENT.to_owned()),
            }
        })
        .collect()
}
