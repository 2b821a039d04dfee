//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::{chat::ChatState, session::SessionState};
use crate::util::routing::RouteAnnouncer;

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
/// Provides the session and chat state contexts, wires the optional
/// route-announcement hook, and sets up routing. This is the only place that
/// looks at the window for the hook; everything below receives it injected.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let chat = RwSignal::new(ChatState::default());
    provide_context(session);
    provide_context(chat);

    let route_hook = {
        #[cfg(feature = "hydrate")]
        {
            crate::util::routing::window_route_hook()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    };
    provide_context(StoredValue::new_local(RouteAnnouncer::new(route_hook)));

    view! {
        <Stylesheet id="leptos" href="/pkg/groupchat-client.css"/>
        <Title text="Group Chat"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
