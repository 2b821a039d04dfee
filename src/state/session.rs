//! Session state: current member identity, the auth phase machine, and the
//! login/register/logout flows.
//!
//! DESIGN
//! ======
//! Phase transitions and error-channel rules live in synchronous methods on
//! [`SessionState`]; the async functions at the bottom own the network round
//! trips. Resolving a session or a successful submit reports back whether the
//! chat list should be loaded, so the caller drives the follow-up fetch.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::api;
use crate::net::types::{ApiError, Member};
use crate::state::chat::{self, ChatState};

/// Shown when the startup session check fails for reasons other than 401.
pub const SESSION_CHECK_FAILED: &str = "Could not verify your session. Try refreshing the page.";
/// Shown when either credential field is empty on submit.
pub const FIELDS_REQUIRED: &str = "Please fill in all fields.";
/// Fallback when a login failure carries no usable server message.
pub const LOGIN_FAILED: &str = "Could not log in. Check your username and password.";
/// Fallback when a registration failure carries no usable server message.
pub const REGISTER_FAILED: &str = "Could not register. Try a different username.";

/// Where the client is in the auth lifecycle. Exactly one phase holds at a
/// time; `Checking` occurs once, on page load, and never recurs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    Checking,
    Authenticated,
    Anonymous,
}

/// Which auth form is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

/// A validated submit ready to go over the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitRequest {
    pub tab: AuthTab,
    pub username: String,
    pub password: String,
}

/// State for the session: member identity, auth phase, form inputs, and the
/// session-check and auth-submit error channels.
///
/// `session_error` belongs to the startup check only; `auth_error` covers
/// submit validation and remote submit failures. Chat errors live elsewhere
/// and are never touched from here except through [`ChatState::clear`] on
/// logout.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub member: Option<Member>,
    pub phase: AuthPhase,
    pub tab: AuthTab,
    pub username: String,
    pub password: String,
    pub submitting: bool,
    pub session_error: Option<String>,
    pub auth_error: Option<String>,
}

impl SessionState {
    /// Apply the outcome of the startup whoami call.
    ///
    /// A 401 is the expected "not logged in" answer and sets no error; any
    /// other failure lands on the session-check channel. Every path leaves
    /// `Checking`. Returns `true` when the chat list should be loaded.
    pub fn resolve_session(&mut self, result: Result<Member, ApiError>) -> bool {
        match result {
            Ok(member) => {
                self.member = Some(member);
                self.phase = AuthPhase::Authenticated;
                true
            }
            Err(err) => {
                if !err.is_unauthorized() {
                    self.session_error = Some(SESSION_CHECK_FAILED.to_owned());
                }
                self.member = None;
                self.phase = AuthPhase::Anonymous;
                false
            }
        }
    }

    /// Validate the form and, if complete, mark the submit in flight.
    ///
    /// Returns `None` when either field is empty; a validation error is set
    /// and no request should be made.
    pub fn begin_submit(&mut self) -> Option<SubmitRequest> {
        if self.username.is_empty() || self.password.is_empty() {
            self.auth_error = Some(FIELDS_REQUIRED.to_owned());
            return None;
        }
        self.auth_error = None;
        self.submitting = true;
        Some(SubmitRequest {
            tab: self.tab,
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }

    /// Apply the outcome of a login or register call.
    ///
    /// On success the member is adopted, the credential inputs are cleared,
    /// and the phase becomes `Authenticated`. On failure a message is derived
    /// from the response (see [`submit_error_message`]) onto the auth-submit
    /// channel. The busy flag is released on both paths. Returns `true` when
    /// the chat list should be loaded.
    pub fn finish_submit(&mut self, result: Result<Member, ApiError>) -> bool {
        let load_chat = match result {
            Ok(member) => {
                self.member = Some(member);
                self.username.clear();
                self.password.clear();
                self.phase = AuthPhase::Authenticated;
                true
            }
            Err(err) => {
                self.auth_error = Some(submit_error_message(self.tab, &err));
                false
            }
        };
        self.submitting = false;
        load_chat
    }

    /// Switch between the login and register forms.
    ///
    /// Switching dismisses any auth-submit error; credentials and chat state
    /// are untouched.
    pub fn switch_tab(&mut self, tab: AuthTab) {
        self.tab = tab;
        self.auth_error = None;
    }

    /// Local logout teardown: drop the member and return to `Anonymous`.
    ///
    /// Runs regardless of whether the logout call succeeded.
    pub fn reset_to_anonymous(&mut self) {
        self.member = None;
        self.phase = AuthPhase::Anonymous;
    }
}

/// Derive the user-facing message for a failed submit.
///
/// Precedence: whatever [`ApiError::server_message`] extracts from the
/// response body, then a static fallback matching the active tab.
pub fn submit_error_message(tab: AuthTab, err: &ApiError) -> String {
    err.server_message().unwrap_or_else(|| {
        match tab {
            AuthTab::Login => LOGIN_FAILED,
            AuthTab::Register => REGISTER_FAILED,
        }
        .to_owned()
    })
}

/// Startup session check: resolve the auth phase, then load chat on success.
pub async fn check_session(session: RwSignal<SessionState>, chat: RwSignal<ChatState>) {
    let result = api::fetch_current_member().await;
    let load_chat = session
        .try_update(|s| s.resolve_session(result))
        .unwrap_or(false);
    if load_chat {
        chat::load_messages(chat).await;
    }
}

/// Submit the active auth form, adopting the member and loading chat on
/// success. Does nothing beyond setting a validation error when a field is
/// empty.
pub async fn submit(session: RwSignal<SessionState>, chat: RwSignal<ChatState>) {
    let Some(request) = session.try_update(|s| s.begin_submit()).flatten() else {
        return;
    };
    let result = match request.tab {
        AuthTab::Login => api::login(&request.username, &request.password).await,
        AuthTab::Register => api::register(&request.username, &request.password).await,
    };
    let load_chat = session
        .try_update(|s| s.finish_submit(result))
        .unwrap_or(false);
    if load_chat {
        chat::load_messages(chat).await;
    }
}

/// Log out: best-effort server call, then unconditional local teardown.
///
/// A failed logout request is deliberately swallowed; the client always
/// returns to the anonymous phase with an empty chat.
pub async fn logout(session: RwSignal<SessionState>, chat: RwSignal<ChatState>) {
    if let Err(_err) = api::logout().await {
        leptos::logging::warn!("logout request failed; clearing local session anyway");
    }
    session.update(SessionState::reset_to_anonymous);
    chat.update(ChatState::clear);
}
