//! Showcase tile for one collection.
//!
//! DESIGN
//! ======
//! The tile is a plain link so pointer clicks go through the router's anchor
//! handling; keyboard activation (Enter / Space) navigates through the same
//! route explicitly. Broken images swap to the shared placeholder once.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::collections::CollectionCard;
use crate::state::fallback::image_error_placeholder;
use crate::util::image::ImageErrorGuard;
use crate::util::keyboard::is_activation_key;

/// A clickable, keyboard-activatable collection tile.
#[component]
pub fn CollectionTile(card: CollectionCard) -> impl IntoView {
    let navigate = use_navigate();
    let href = card.route();
    let label = card.aria_label();
    let accent_style = format!("--collection-accent: {}", card.accent);
    let src = RwSignal::new(card.image.clone());
    let image_guard = RwSignal::new(ImageErrorGuard::default());

    let on_keydown = {
        let href = href.clone();
        move |ev: leptos::ev::KeyboardEvent| {
            if is_activation_key(&ev.key()) {
                ev.prevent_default();
                navigate(&href, NavigateOptions::default());
            }
        }
    };

    let on_image_error = move |_| {
        let replacement = image_guard
            .try_update(|guard| guard.on_error(image_error_placeholder()))
            .flatten();
        if let Some(placeholder) = replacement {
            log::debug!("collection image failed to load; using placeholder");
            src.set(placeholder.to_owned());
        }
    };

    view! {
        <a
            class="collection-tile"
            href=href
            aria-label=label
            style=accent_style
            on:keydown=on_keydown
        >
            <img
                class="collection-tile__image"
                src=move || src.get()
                alt=card.title
                loading="lazy"
                on:error=on_image_error
            />
            <span class="collection-tile__shade" aria-hidden="true"></span>
        </a>
    }
}
