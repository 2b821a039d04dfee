//! Wire types shared between the API layer and client state.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// An authenticated member as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Member {
    pub id: i64,
    pub username: String,
}

/// A single chat message as returned by the chat endpoints.
///
/// `created_at` is kept as the raw ISO-8601 string the server sent; parsing
/// happens only where the value is used as a sort key or for display. A
/// message without the field decodes to an empty string, which sorts as
/// epoch 0 like any other unparsable timestamp.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChatMessage {
    pub id: i64,
    pub member_username: String,
    pub text: String,
    #[serde(default)]
    pub created_at: String,
}

/// The body of a failed API response.
///
/// Error bodies from the server vary in shape: sometimes a bare string,
/// sometimes a JSON object carrying `detail` or `error` fields, sometimes
/// nothing at all. Parsing them into an explicit variant keeps the message
/// extraction in [`ApiError::server_message`] free of speculative field access.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorPayload {
    Json(serde_json::Value),
    Text(String),
    Empty,
}

impl ErrorPayload {
    /// Classify a raw response body.
    pub fn from_body(body: &str) -> Self {
        if body.trim().is_empty() {
            return Self::Empty;
        }
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(body.to_owned()),
        }
    }
}

/// A failed API call.
///
/// `status` is `None` when the request never produced a response (network
/// failure, or running outside the browser).
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: Option<u16>,
    pub payload: ErrorPayload,
}

impl ApiError {
    /// An error for requests that never reached the server.
    pub fn network() -> Self {
        Self {
            status: None,
            payload: ErrorPayload::Empty,
        }
    }

    /// Whether the server rejected the request as unauthenticated.
    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }

    /// Extract a human-readable message from the error body, if one exists.
    ///
    /// Precedence: a bare string body, then a JSON string under `detail`,
    /// then a JSON string under `error`. Anything else yields `None` and the
    /// caller falls back to a static message.
    pub fn server_message(&self) -> Option<String> {
        match &self.payload {
            ErrorPayload::Text(text) => Some(text.clone()),
            ErrorPayload::Json(value) => {
                if let Some(s) = value.as_str() {
                    return Some(s.to_owned());
                }
                if let Some(s) = value.get("detail").and_then(serde_json::Value::as_str) {
                    return Some(s.to_owned());
                }
                value
                    .get("error")
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_owned)
            }
            ErrorPayload::Empty => None,
        }
    }
}
