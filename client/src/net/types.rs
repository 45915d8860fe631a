//! Wire DTOs for the storefront REST API.
//!
//! DESIGN
//! ======
//! Collections are server-owned and loosely shaped: any field may be missing,
//! `null`, an empty string, or of the wrong type. Deserialization normalizes
//! all of those to `None` so the card mapper only has one "absent" case to
//! handle. Malformed list entries (non-object collections, gallery images
//! without a `url`) are dropped rather than failing the whole response.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// A product collection as returned by the public collections endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    /// Server identifier (`_id` on the wire).
    #[serde(rename = "_id", default, deserialize_with = "deserialize_text")]
    pub id: Option<String>,
    /// URL-safe slug used in `/collection/<handle>`.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub handle: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub title: Option<String>,
    /// Designated primary image.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub hero_image: Option<String>,
    /// Uploaded gallery images. Only fallback data reads these.
    #[serde(default, deserialize_with = "deserialize_images")]
    pub images: Vec<CollectionImage>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub tagline: Option<String>,
    /// CSS colour used to accent the card.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub accent_color: Option<String>,
}

/// One uploaded collection image.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionImage {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub url: Option<String>,
}

/// `{ "data": { "collections": [...] } }` response envelope.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CollectionListEnvelope {
    #[serde(default)]
    pub data: Option<CollectionListData>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CollectionListData {
    #[serde(default, deserialize_with = "deserialize_collections")]
    pub collections: Option<Vec<Collection>>,
}

impl CollectionListEnvelope {
    /// Collections carried by the envelope; missing levels mean an empty list.
    pub fn into_collections(self) -> Vec<Collection> {
        self.data.and_then(|data| data.collections).unwrap_or_default()
    }
}

/// Accept strings (blank means absent), numbers (stringified), and treat
/// everything else as absent.
fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_value(serde_json::Value::deserialize(deserializer)?))
}

fn text_value(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(text) if !text.trim().is_empty() => Some(text),
        serde_json::Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Keep only image objects carrying a usable `url`; anything else in the
/// array (strings, `null`, numbers) is skipped.
fn deserialize_images<'de, D>(deserializer: D) -> Result<Vec<CollectionImage>, D::Error>
where
    D: Deserializer<'de>,
{
    let serde_json::Value::Array(entries) = serde_json::Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(entries
        .into_iter()
        .filter_map(|entry| match entry {
            serde_json::Value::Object(mut fields) => fields.remove("url").and_then(text_value),
            _ => None,
        })
        .map(|url| CollectionImage { url: Some(url) })
        .collect())
}

/// Decode each list entry on its own so one malformed collection does not
/// discard the rest. A non-array value counts as absent.
fn deserialize_collections<'de, D>(deserializer: D) -> Result<Option<Vec<Collection>>, D::Error>
where
    D: Deserializer<'de>,
{
    let serde_json::Value::Array(entries) = serde_json::Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    let collections = entries
        .into_iter()
        .filter(serde_json::Value::is_object)
        .filter_map(|entry| match serde_json::from_value::<Collection>(entry) {
            Ok(collection) => Some(collection),
            Err(err) => {
                log::debug!("skipping malformed collection: {err}");
                None
            }
        })
        .collect();
    Ok(Some(collections))
}
