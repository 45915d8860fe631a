use super::*;

#[test]
fn fallback_set_is_non_empty_and_in_bundle_order() {
    let handles: Vec<_> = fallback_cards().iter().map(|c| c.handle.as_str()).collect();
    assert_eq!(handles, vec!["street-frames", "summer-drop", "monochrome", "retro-wave"]);
}

#[test]
fn fallback_ids_are_unique() {
    let mut ids: Vec<_> = fallback_cards().iter().map(|c| c.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), fallback_cards().len());
}

#[test]
fn fallback_image_prefers_hero_then_gallery() {
    let cards = fallback_cards();
    assert_eq!(cards[0].image, "/frames/frame-1-fixed.svg");
    assert_eq!(cards[1].image, "/frames/frame-2-fixed.svg");
    assert_eq!(cards[3].image, "/frames/frame-4-fixed.svg");
}

#[test]
fn fallback_defaults_fill_missing_tagline_and_accent() {
    let cards = fallback_cards();
    assert_eq!(cards[1].tagline, DEFAULT_TAGLINE);
    assert_eq!(cards[2].accent, DEFAULT_ACCENT);
    assert_eq!(cards[0].accent, "#f97316");
}

#[test]
fn placeholder_is_first_fallback_image() {
    assert_eq!(image_error_placeholder(), "/frames/frame-1-fixed.svg");
}

#[test]
fn fallback_cards_from_handles_sparse_entries() {
    let cards = fallback_cards_from(&[Collection::default()], "https://shop.example.com");
    assert_eq!(
        cards,
        vec![CollectionCard {
            id: "fallback-0".to_owned(),
            handle: "fallback-0".to_owned(),
            title: "fallback-0".to_owned(),
            image: DEFAULT_PLACEHOLDER_IMAGE.to_owned(),
            tagline: DEFAULT_TAGLINE.to_owned(),
            accent: DEFAULT_ACCENT.to_owned(),
        }]
    );
}

#[test]
fn fallback_cards_from_resolves_uploaded_gallery_images() {
    let collection = Collection {
        handle: Some("h".to_owned()),
        images: vec![CollectionImage { url: Some("/uploads/g.png".to_owned()) }],
        ..Collection::default()
    };
    let cards = fallback_cards_from(&[collection], "https://shop.example.com");
    assert_eq!(cards[0].image, "https://shop.example.com/uploads/g.png");
}

#[test]
fn bundled_images_are_origin_independent_assets() {
    for entry in &FALLBACK_COLLECTIONS {
        for path in [entry.hero_image, entry.gallery_image].into_iter().flatten() {
            assert!(path.starts_with('/') && !path.starts_with("//"), "{path} is not root-relative");
            assert!(!path.starts_with("/uploads/"), "{path} would resolve against the API origin");
            assert_eq!(resolve_image_url(Some(path), "https://a.example").as_deref(), Some(path));
            assert_eq!(resolve_image_url(Some(path), "https://b.example").as_deref(), Some(path));
        }
    }
}
