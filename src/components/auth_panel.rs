//! Login/register tabs and credential form for the anonymous phase.

use leptos::prelude::*;

use crate::state::chat::ChatState;
use crate::state::session::{self, AuthTab, SessionState};

/// Auth panel with login/register tabs and a credential form.
///
/// Submits run through the session state machine; the submit button is
/// disabled while a submit is in flight.
#[component]
pub fn AuthPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let chat = expect_context::<RwSignal<ChatState>>();

    let tab = move || session.get().tab;
    let tab_class = move |t: AuthTab| {
        if tab() == t {
            "auth-tab auth-tab-active"
        } else {
            "auth-tab"
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        leptos::task::spawn_local(session::submit(session, chat));
    };

    view! {
        <div class="auth-layout">
            <h1 class="auth-title">"Group Chat"</h1>
            {move || {
                session
                    .get()
                    .session_error
                    .map(|msg| view! { <div class="session-error">{msg}</div> })
            }}
            <div class="auth-tabs">
                <button
                    type="button"
                    class=move || tab_class(AuthTab::Login)
                    on:click=move |_| session.update(|s| s.switch_tab(AuthTab::Login))
                >
                    "Log in"
                </button>
                <button
                    type="button"
                    class=move || tab_class(AuthTab::Register)
                    on:click=move |_| session.update(|s| s.switch_tab(AuthTab::Register))
                >
                    "Register"
                </button>
            </div>
            <form class="auth-form" on:submit=on_submit>
                <div class="auth-field">
                    <label class="auth-label" for="auth-username">
                        "Username"
                    </label>
                    <input
                        id="auth-username"
                        type="text"
                        class="auth-input"
                        autocomplete="username"
                        prop:value=move || session.get().username
                        on:input=move |ev| {
                            session.update(|s| s.username = event_target_value(&ev));
                        }
                    />
                </div>
                <div class="auth-field">
                    <label class="auth-label" for="auth-password">
                        "Password"
                    </label>
                    <input
                        id="auth-password"
                        type="password"
                        class="auth-input"
                        autocomplete=move || {
                            match tab() {
                                AuthTab::Login => "current-password",
                                AuthTab::Register => "new-password",
                            }
                        }
                        prop:value=move || session.get().password
                        on:input=move |ev| {
                            session.update(|s| s.password = event_target_value(&ev));
                        }
                    />
                </div>
                {move || {
                    session.get().auth_error.map(|msg| view! { <div class="auth-error">{msg}</div> })
                }}
                <button
                    type="submit"
                    class="primary-button auth-submit-button"
                    disabled=move || session.get().submitting
                >
                    {move || {
                        match tab() {
                            AuthTab::Login => "Log in",
                            AuthTab::Register => "Register",
                        }
                    }}
                </button>
            </form>
        </div>
    }
}
