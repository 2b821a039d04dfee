//! The single chat page: session check on mount, then either the auth forms
//! or the chat view depending on phase.

use leptos::prelude::*;

use crate::components::auth_panel::AuthPanel;
use crate::components::chat_panel::ChatPanel;
use crate::components::session_bar::SessionBar;
use crate::state::chat::ChatState;
use crate::state::session::{self, AuthPhase, SessionState};
use crate::util::routing::RouteAnnouncer;

/// Home page.
///
/// On mount it announces the path to the injected route hook and starts the
/// one-time session check; afterwards it renders by auth phase.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let announcer = expect_context::<StoredValue<RouteAnnouncer, LocalStorage>>();

    Effect::new(move || {
        announcer.with_value(|a| a.announce("/"));
        leptos::task::spawn_local(session::check_session(session, chat));
    });

    view! {
        <div class="home-root">
            <div class="home-container">
                {move || match session.get().phase {
                    AuthPhase::Checking => {
                        view! { <div class="global-loading">"Loading..."</div> }.into_any()
                    }
                    AuthPhase::Authenticated => {
                        view! {
                            <SessionBar/>
                            <ChatPanel/>
                        }
                            .into_any()
                    }
                    AuthPhase::Anonymous => view! { <AuthPanel/> }.into_any(),
                }}
            </div>
        </div>
    }
}
