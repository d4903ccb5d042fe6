//! Root application component with routing and context providers.

use advisor::BackendConfig;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::AdvisorPage;
use crate::state::chat::ChatState;
use crate::util::backend_config::{self, BACKEND_URL_META};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The backend base URL provided by the server is echoed into a `<meta>` tag
/// so the hydrated client resolves the same endpoint.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let backend_url = use_context::<BackendConfig>().unwrap_or_default().base_url().to_owned();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=BACKEND_URL_META content=backend_url/>
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
/// Resolves the backend config (server context during SSR, `<meta>` tag after
/// hydration) and provides it with the chat state to all children.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<BackendConfig>().unwrap_or_else(backend_config::read_from_document);
    let chat = RwSignal::new(ChatState::default());

    provide_context(config);
    provide_context(chat);

    view! {
        <Stylesheet id="leptos" href="/pkg/advisor-ui.css"/>
        <Title text="AI Wealth Management Advisor"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=AdvisorPage/>
            </Routes>
        </Router>
    }
}
