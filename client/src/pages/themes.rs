//! Collection showcase ("themes") page.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount the page requests the public collection list once through an
//! abortable handle; unmounting aborts it so the browser request is released.
//! Successful responses become cards with per-field fallback, and any failure
//! or empty response renders the bundled fallback set. The grid is never
//! empty. Tiles are keyed by card id so a reload keeps mounted tiles (and
//! their image-error state) for cards that are still present.

use leptos::prelude::*;

use crate::components::collection_tile::CollectionTile;
use crate::net::client::ApiClient;
use crate::state::collections::{CollectionCard, CollectionsState};
use crate::state::fallback::fallback_cards;

/// Showcase grid of collection tiles.
#[component]
pub fn ThemesPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let collections = RwSignal::new(CollectionsState::default());
    let asset_origin = client.config().asset_origin().to_owned();

    #[cfg(feature = "hydrate")]
    {
        use crate::net::api::list_public_collections;
        use crate::net::cancel::cancellable;
        use crate::net::error::ApiError;

        collections.update(CollectionsState::begin_load);
        let (load, handle) = cancellable(async move { list_public_collections(&client).await });
        leptos::task::spawn_local(async move {
            let result = load.await;
            if matches!(result, Err(ApiError::Cancelled)) {
                return;
            }
            collections.try_update(|state| state.apply_result(result));
        });
        on_cleanup(move || handle.abort());
    }

    let cards = Memo::new(move |_| collections.with(|state| state.cards(&asset_origin)));

    let skeleton = move || {
        fallback_cards()
            .iter()
            .map(|tile| {
                view! {
                    <div
                        class="collection-tile collection-tile--skeleton"
                        data-handle=tile.handle.clone()
                        aria-hidden="true"
                    ></div>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="themes-page">
            <div class="themes-page__panel">
                <div class="themes-page__grid">
                    <Show
                        when=move || !collections.with(CollectionsState::show_skeleton)
                        fallback=skeleton
                    >
                        <For
                            each=move || cards.get()
                            key=|card: &CollectionCard| card.id.clone()
                            children=|card: CollectionCard| view! { <CollectionTile card=card /> }
                        />
                    </Show>
                </div>
            </div>
        </div>
    }
}
