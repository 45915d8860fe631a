//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::net::client::ApiClient;
use crate::pages::themes::ThemesPage;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauthorized_listener;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API client and auth state to child components and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let client = ApiClient::browser(ApiConfig::from_env());
    let auth = RwSignal::new(AuthState::from_store(client.tokens()));
    install_unauthorized_listener(&client, auth);

    provide_context(client);
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Storefront"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ThemesPage/>
                <Route path=StaticSegment("themes") view=ThemesPage/>
            </Routes>
        </Router>
    }
}
