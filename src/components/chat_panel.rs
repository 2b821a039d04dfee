//! Chat body: message history and the send form.

use leptos::prelude::*;

use crate::state::chat::{self, ChatState, format_created_at};

/// Chat panel showing message history and an input for sending new messages.
///
/// The list auto-scrolls to the newest entry when it grows. The input is
/// disabled while a send is in flight, and the send button additionally
/// requires a non-blank draft.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        leptos::task::spawn_local(chat::send_message(chat));
    };

    let can_send = move || {
        let state = chat.get();
        !state.sending && !state.draft.trim().is_empty()
    };

    view! {
        <div class="chat-body">
            {move || chat.get().error.map(|msg| view! { <div class="chat-error">{msg}</div> })}
            {move || {
                let state = chat.get();
                if state.loading {
                    return view! { <div class="chat-loading">"Loading messages..."</div> }
                        .into_any();
                }
                if state.messages.is_empty() {
                    return view! {
                        <div class="chat-messages-container" node_ref=messages_ref>
                            <div class="chat-empty">"No messages yet"</div>
                        </div>
                    }
                        .into_any();
                }
                view! {
                    <div class="chat-messages-container" node_ref=messages_ref>
                        {state
                            .messages
                            .iter()
                            .map(|msg| {
                                view! {
                                    <div class="chat-message">
                                        <div class="chat-message-main">
                                            <span class="chat-message-username">
                                                {msg.member_username.clone()}
                                            </span>
                                            <span class="chat-message-text">{msg.text.clone()}</span>
                                        </div>
                                        <div class="chat-message-meta">
                                            {format_created_at(&msg.created_at)}
                                        </div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            }}
            <form class="chat-input-form" on:submit=on_send>
                <div class="chat-input-row">
                    <input
                        type="text"
                        class="chat-input"
                        placeholder="Write a message..."
                        prop:value=move || chat.get().draft
                        on:input=move |ev| {
                            chat.update(|c| c.draft = event_target_value(&ev));
                        }
                        disabled=move || chat.get().sending
                    />
                    <button
                        type="submit"
                        class="primary-button chat-send-button"
                        disabled=move || !can_send()
                    >
                        "Send"
                    </button>
                </div>
                {move || {
                    chat.get()
                        .draft_error
                        .map(|msg| view! { <div class="chat-message-error">{msg}</div> })
                }}
            </form>
        </div>
    }
}
