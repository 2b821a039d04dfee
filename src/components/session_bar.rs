//! Header bar for the authenticated phase: greeting and logout.

use leptos::prelude::*;

use crate::state::chat::ChatState;
use crate::state::session::{self, SessionState};

/// Greeting bar with a logout button.
///
/// Logout is fail-open: the button always returns the client to the
/// anonymous phase, whatever the server says.
#[component]
pub fn SessionBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let chat = expect_context::<RwSignal<ChatState>>();

    let greeting = move || {
        session
            .get()
            .member
            .map_or_else(String::new, |m| format!("Hi, {}", m.username))
    };

    let on_logout = move |_| {
        leptos::task::spawn_local(session::logout(session, chat));
    };

    view! {
        <div class="chat-header">
            <div class="chat-greeting">{greeting}</div>
            <button
                type="button"
                class="secondary-button chat-logout-button"
                on:click=on_logout
                disabled=move || session.get().submitting
            >
                "Log out"
            </button>
        </div>
    }
}
