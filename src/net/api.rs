//! REST API helpers for the auth and chat endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Session cookies ride
//! along automatically on same-origin requests.
//! Server-side (SSR): stubs returning an error, since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx responses have their body
//! captured into the error so callers can surface server-provided messages;
//! transport failures map to `ApiError::network()`. Nothing here panics.

#![allow(clippy::unused_async)]

use super::types::{ApiError, ChatMessage, Member};

#[cfg(feature = "hydrate")]
use super::types::ErrorPayload;

/// Build an [`ApiError`] from a non-2xx response, capturing the body.
#[cfg(feature = "hydrate")]
async fn error_from_response(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let payload = match resp.text().await {
        Ok(body) => ErrorPayload::from_body(&body),
        Err(_) => ErrorPayload::Empty,
    };
    ApiError {
        status: Some(status),
        payload,
    }
}

/// Fetch the currently authenticated member from `GET /api/auth/me/`.
///
/// # Errors
///
/// Returns an error carrying status 401 when no session exists, or the
/// failure details for any other non-2xx or transport error.
pub async fn fetch_current_member() -> Result<Member, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me/")
            .send()
            .await
            .map_err(|_| ApiError::network())?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<Member>().await.map_err(|_| ApiError::network())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::network())
    }
}

/// Log in via `POST /api/auth/login/`.
///
/// # Errors
///
/// Returns the failure details on any non-2xx or transport error.
pub async fn login(username: &str, password: &str) -> Result<Member, ApiError> {
    credentials_post("/api/auth/login/", username, password).await
}

/// Register via `POST /api/auth/register/`.
///
/// # Errors
///
/// Returns the failure details on any non-2xx or transport error.
pub async fn register(username: &str, password: &str) -> Result<Member, ApiError> {
    credentials_post("/api/auth/register/", username, password).await
}

async fn credentials_post(url: &str, username: &str, password: &str) -> Result<Member, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });
        let resp = gloo_net::http::Request::post(url)
            .json(&body)
            .map_err(|_| ApiError::network())?
            .send()
            .await
            .map_err(|_| ApiError::network())?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<Member>().await.map_err(|_| ApiError::network())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, username, password);
        Err(ApiError::network())
    }
}

/// End the current session via `POST /api/auth/logout/`.
///
/// The response body is ignored; callers decide whether a failure matters.
///
/// # Errors
///
/// Returns the failure details on any non-2xx or transport error.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/logout/")
            .send()
            .await
            .map_err(|_| ApiError::network())?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::network())
    }
}

/// Fetch the full message collection from `GET /api/chat/messages/`.
///
/// # Errors
///
/// Returns the failure details on any non-2xx or transport error.
pub async fn fetch_messages() -> Result<Vec<ChatMessage>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/chat/messages/")
            .send()
            .await
            .map_err(|_| ApiError::network())?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<Vec<ChatMessage>>()
            .await
            .map_err(|_| ApiError::network())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::network())
    }
}

/// Post a new message via `POST /api/chat/messages/`.
///
/// Returns the stored message; the server is the source of truth for `id`,
/// `member_username`, and `created_at`.
///
/// # Errors
///
/// Returns the failure details on any non-2xx or transport error.
pub async fn send_message(text: &str) -> Result<ChatMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "text": text });
        let resp = gloo_net::http::Request::post("/api/chat/messages/")
            .json(&body)
            .map_err(|_| ApiError::network())?
            .send()
            .await
            .map_err(|_| ApiError::network())?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<ChatMessage>()
            .await
            .map_err(|_| ApiError::network())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err(ApiError::network())
    }
}
