use super::*;
use crate::net::types::ErrorPayload;

fn member(id: i64, username: &str) -> Member {
    Member {
        id,
        username: username.to_owned(),
    }
}

fn remote_error(status: u16) -> ApiError {
    ApiError {
        status: Some(status),
        payload: ErrorPayload::Empty,
    }
}

fn remote_error_with(status: u16, payload: ErrorPayload) -> ApiError {
    ApiError {
        status: Some(status),
        payload,
    }
}

fn filled_form() -> SessionState {
    SessionState {
        username: "bob".to_owned(),
        password: "hunter2".to_owned(),
        ..SessionState::default()
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_checking_login_tab() {
    let state = SessionState::default();
    assert!(state.member.is_none());
    assert_eq!(state.phase, AuthPhase::Checking);
    assert_eq!(state.tab, AuthTab::Login);
    assert!(!state.submitting);
    assert!(state.session_error.is_none());
    assert!(state.auth_error.is_none());
}

// =============================================================
// resolve_session
// =============================================================

#[test]
fn resolve_session_success_authenticates_and_loads_chat() {
    let mut state = SessionState::default();
    let load_chat = state.resolve_session(Ok(member(1, "bob")));
    assert!(load_chat);
    assert_eq!(state.phase, AuthPhase::Authenticated);
    assert_eq!(state.member, Some(member(1, "bob")));
    assert!(state.session_error.is_none());
}

#[test]
fn resolve_session_401_is_silent_anonymous() {
    let mut state = SessionState::default();
    let load_chat = state.resolve_session(Err(remote_error(401)));
    assert!(!load_chat);
    assert_eq!(state.phase, AuthPhase::Anonymous);
    assert!(state.member.is_none());
    assert!(state.session_error.is_none());
}

#[test]
fn resolve_session_server_error_sets_session_channel() {
    let mut state = SessionState::default();
    let load_chat = state.resolve_session(Err(remote_error(500)));
    assert!(!load_chat);
    assert_eq!(state.phase, AuthPhase::Anonymous);
    assert_eq!(state.session_error.as_deref(), Some(SESSION_CHECK_FAILED));
    // The auth-submit channel is untouched.
    assert!(state.auth_error.is_none());
}

#[test]
fn resolve_session_network_error_sets_session_channel() {
    let mut state = SessionState::default();
    state.resolve_session(Err(ApiError::network()));
    assert_eq!(state.phase, AuthPhase::Anonymous);
    assert_eq!(state.session_error.as_deref(), Some(SESSION_CHECK_FAILED));
}

// =============================================================
// begin_submit (validation)
// =============================================================

#[test]
fn begin_submit_rejects_empty_username() {
    let mut state = SessionState {
        password: "hunter2".to_owned(),
        ..SessionState::default()
    };
    assert_eq!(state.begin_submit(), None);
    assert_eq!(state.auth_error.as_deref(), Some(FIELDS_REQUIRED));
    assert!(!state.submitting);
}

#[test]
fn begin_submit_rejects_empty_password() {
    let mut state = SessionState {
        username: "bob".to_owned(),
        ..SessionState::default()
    };
    assert_eq!(state.begin_submit(), None);
    assert_eq!(state.auth_error.as_deref(), Some(FIELDS_REQUIRED));
    assert!(!state.submitting);
}

#[test]
fn begin_submit_yields_request_and_marks_busy() {
    let mut state = filled_form();
    state.auth_error = Some("stale".to_owned());

    let request = state.begin_submit().expect("request");
    assert_eq!(
        request,
        SubmitRequest {
            tab: AuthTab::Login,
            username: "bob".to_owned(),
            password: "hunter2".to_owned(),
        }
    );
    assert!(state.submitting);
    assert!(state.auth_error.is_none());
}

#[test]
fn begin_submit_carries_active_tab() {
    let mut state = filled_form();
    state.switch_tab(AuthTab::Register);
    let request = state.begin_submit().expect("request");
    assert_eq!(request.tab, AuthTab::Register);
}

// =============================================================
// finish_submit
// =============================================================

#[test]
fn finish_submit_success_adopts_member_and_clears_credentials() {
    let mut state = filled_form();
    state.begin_submit();

    let load_chat = state.finish_submit(Ok(member(1, "bob")));
    assert!(load_chat);
    assert_eq!(state.phase, AuthPhase::Authenticated);
    assert_eq!(state.member, Some(member(1, "bob")));
    assert!(state.username.is_empty());
    assert!(state.password.is_empty());
    assert!(!state.submitting);
    assert!(state.auth_error.is_none());
}

#[test]
fn finish_submit_failure_releases_busy_and_keeps_phase() {
    let mut state = filled_form();
    state.begin_submit();

    let load_chat = state.finish_submit(Err(remote_error(400)));
    assert!(!load_chat);
    assert!(!state.submitting);
    assert!(state.member.is_none());
    // Credentials stay so the user can fix and retry.
    assert_eq!(state.username, "bob");
    assert_eq!(state.password, "hunter2");
}

#[test]
fn finish_submit_failure_uses_string_body() {
    let mut state = filled_form();
    state.begin_submit();
    state.finish_submit(Err(remote_error_with(
        400,
        ErrorPayload::Text("no such account".to_owned()),
    )));
    assert_eq!(state.auth_error.as_deref(), Some("no such account"));
}

#[test]
fn finish_submit_failure_uses_detail_field() {
    let mut state = filled_form();
    state.begin_submit();
    state.finish_submit(Err(remote_error_with(
        400,
        ErrorPayload::Json(serde_json::json!({"detail":"wrong password"})),
    )));
    assert_eq!(state.auth_error.as_deref(), Some("wrong password"));
}

#[test]
fn finish_submit_failure_uses_error_field() {
    let mut state = filled_form();
    state.begin_submit();
    state.finish_submit(Err(remote_error_with(
        400,
        ErrorPayload::Json(serde_json::json!({"error":"taken"})),
    )));
    assert_eq!(state.auth_error.as_deref(), Some("taken"));
}

#[test]
fn finish_submit_fallback_depends_on_tab() {
    let mut login = filled_form();
    login.begin_submit();
    login.finish_submit(Err(remote_error(400)));
    assert_eq!(login.auth_error.as_deref(), Some(LOGIN_FAILED));

    let mut register = filled_form();
    register.switch_tab(AuthTab::Register);
    register.begin_submit();
    register.finish_submit(Err(remote_error(400)));
    assert_eq!(register.auth_error.as_deref(), Some(REGISTER_FAILED));
}

// =============================================================
// switch_tab
// =============================================================

#[test]
fn switch_tab_dismisses_auth_error_only() {
    let mut state = filled_form();
    state.auth_error = Some("bad".to_owned());
    state.session_error = Some("session".to_owned());

    state.switch_tab(AuthTab::Register);
    assert_eq!(state.tab, AuthTab::Register);
    assert!(state.auth_error.is_none());
    // Credentials and the session-check channel are untouched.
    assert_eq!(state.username, "bob");
    assert_eq!(state.password, "hunter2");
    assert_eq!(state.session_error.as_deref(), Some("session"));
}

// =============================================================
// logout teardown
// =============================================================

#[test]
fn reset_to_anonymous_drops_member() {
    let mut state = SessionState::default();
    state.resolve_session(Ok(member(1, "bob")));

    state.reset_to_anonymous();
    assert_eq!(state.phase, AuthPhase::Anonymous);
    assert!(state.member.is_none());
}

// =============================================================
// Scenario: 401 on load, failed validation, then successful login
// =============================================================

#[test]
fn anonymous_login_flow_ends_authenticated_with_chat_load() {
    let mut state = SessionState::default();

    // whoami returns 401: login/register tabs show, no error.
    assert!(!state.resolve_session(Err(remote_error(401))));
    assert_eq!(state.phase, AuthPhase::Anonymous);
    assert!(state.session_error.is_none());

    // Empty username: validation error, no request.
    state.password = "hunter2".to_owned();
    assert_eq!(state.begin_submit(), None);
    assert_eq!(state.auth_error.as_deref(), Some(FIELDS_REQUIRED));

    // Both fields filled: login succeeds and triggers the chat load.
    state.username = "bob".to_owned();
    let request = state.begin_submit().expect("request");
    assert_eq!(request.tab, AuthTab::Login);
    let load_chat = state.finish_submit(Ok(member(1, "bob")));
    assert!(load_chat);
    assert_eq!(state.phase, AuthPhase::Authenticated);
    assert_eq!(state.member, Some(member(1, "bob")));
}
