//! Image URL resolution and broken-image handling.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

/// Resolve a server image reference into a URL the browser can load.
///
/// - blank or missing: `None`
/// - absolute (`http(s)://`, `//`, `data:`, `blob:`): unchanged
/// - `/uploads/...` or bare relative paths: joined to `asset_origin`
/// - other root-relative paths: front-end assets, unchanged
pub fn resolve_image_url(raw: Option<&str>, asset_origin: &str) -> Option<String> {
    let raw = raw.map(str::trim).filter(|value| !value.is_empty())?;

    let is_absolute = ["http://", "https://", "//", "data:", "blob:"]
        .iter()
        .any(|prefix| raw.starts_with(prefix));
    if is_absolute {
        return Some(raw.to_owned());
    }

    let origin = asset_origin.trim_end_matches('/');
    if raw.starts_with("/uploads/") {
        return Some(format!("{origin}{raw}"));
    }
    if raw.starts_with('/') {
        return Some(raw.to_owned());
    }
    Some(format!("{origin}/{raw}"))
}

/// Per-element `onerror` state. The first failure swaps in the placeholder,
/// later failures are ignored so a broken placeholder cannot loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImageErrorGuard {
    tripped: bool,
}

impl ImageErrorGuard {
    /// Returns the replacement source on the first error only.
    pub fn on_error<'a>(&mut self, placeholder: &'a str) -> Option<&'a str> {
        if self.tripped {
            return None;
        }
        self.tripped = true;
        Some(placeholder)
    }

    pub fn is_tripped(&self) -> bool {
        self.tripped
    }
}
