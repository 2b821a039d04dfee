//! Chat state: the ordered message list, load/send operations, and the
//! optimistic append.
//!
//! DESIGN
//! ======
//! All state transitions are synchronous methods on [`ChatState`] so the
//! ordering and error-channel rules are testable without a browser. The async
//! functions at the bottom own the network round trips and feed results back
//! into the pure layer through the shared `RwSignal`.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::api;
use crate::net::types::{ApiError, ChatMessage};

/// Shown when fetching the message list fails.
pub const LOAD_FAILED: &str = "Could not load messages.";
/// Shown when posting a message fails.
pub const SEND_FAILED: &str = "Could not send the message.";
/// Shown when the user tries to send an empty or whitespace-only message.
pub const MESSAGE_REQUIRED: &str = "Enter a message.";

/// State for the chat view: messages, the draft being typed, and the
/// per-operation busy flags and error channels.
///
/// `error` holds remote load/send failures; `draft_error` holds client-side
/// validation only. The two never clear each other.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub draft: String,
    pub loading: bool,
    pub sending: bool,
    pub error: Option<String>,
    pub draft_error: Option<String>,
}

impl ChatState {
    /// Start a full reload: mark busy and clear the previous load/send error.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply the outcome of a load.
    ///
    /// On success the fetched list replaces the local one after sorting. On
    /// failure the previous list is left untouched and a static message is
    /// set. The busy flag is released on both paths.
    pub fn finish_load(&mut self, result: Result<Vec<ChatMessage>, ApiError>) {
        match result {
            Ok(mut fetched) => {
                sort_by_created_at(&mut fetched);
                self.messages = fetched;
            }
            Err(_) => {
                self.error = Some(LOAD_FAILED.to_owned());
            }
        }
        self.loading = false;
    }

    /// Validate the draft and, if sendable, mark the send in flight.
    ///
    /// Returns the trimmed text to post, or `None` when the draft is empty
    /// after trimming (a validation error is set and no request should be
    /// made).
    pub fn begin_send(&mut self) -> Option<String> {
        let trimmed = self.draft.trim();
        if trimmed.is_empty() {
            self.draft_error = Some(MESSAGE_REQUIRED.to_owned());
            return None;
        }
        let text = trimmed.to_owned();
        self.draft_error = None;
        self.error = None;
        self.sending = true;
        Some(text)
    }

    /// Apply the outcome of a send.
    ///
    /// On success the server-returned message is appended and the list
    /// re-sorted, then the draft is cleared. On failure the draft is
    /// preserved so the user can retry. The busy flag is released on both
    /// paths.
    pub fn finish_send(&mut self, result: Result<ChatMessage, ApiError>) {
        match result {
            Ok(message) => {
                self.messages.push(message);
                sort_by_created_at(&mut self.messages);
                self.draft.clear();
            }
            Err(_) => {
                self.error = Some(SEND_FAILED.to_owned());
            }
        }
        self.sending = false;
    }

    /// Drop all messages, the draft, and both chat error channels.
    ///
    /// Called on logout. Busy flags are left alone; an in-flight operation
    /// releases its own flag when it completes.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.draft.clear();
        self.error = None;
        self.draft_error = None;
    }
}

/// Sort messages by `created_at`, oldest first.
///
/// The one place ordering lives: both the load path and the optimistic append
/// go through here, so server-side clock skew or out-of-order arrival cannot
/// produce a misordered list. The sort is stable, so messages with equal (or
/// equally unparsable) timestamps keep their relative order.
pub fn sort_by_created_at(messages: &mut [ChatMessage]) {
    messages.sort_by_key(|m| created_at_millis(&m.created_at));
}

/// Parse an ISO-8601 timestamp into epoch milliseconds for ordering.
///
/// Missing or unparsable values sort as epoch 0, i.e. before anything the
/// server could plausibly return.
pub fn created_at_millis(created_at: &str) -> i64 {
    chrono::DateTime::parse_from_rfc3339(created_at)
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(0)
}

/// Format a `created_at` value for the message meta line.
///
/// Unparsable values render as an empty string rather than a placeholder.
pub fn format_created_at(created_at: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(created_at)
        .map(|dt| dt.format("%d.%m.%Y %H:%M").to_string())
        .unwrap_or_default()
}

/// Fetch the full message collection and replace the local list.
pub async fn load_messages(chat: RwSignal<ChatState>) {
    chat.update(|c| c.begin_load());
    let result = api::fetch_messages().await;
    chat.update(|c| c.finish_load(result));
}

/// Post the current draft, then optimistically append the stored message.
///
/// Does nothing beyond setting a validation error when the trimmed draft is
/// empty.
pub async fn send_message(chat: RwSignal<ChatState>) {
    let Some(text) = chat.try_update(|c| c.begin_send()).flatten() else {
        return;
    };
    let result = api::send_message(&text).await;
    chat.update(|c| c.finish_send(result));
}
