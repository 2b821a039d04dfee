//! Leptos view components.

pub mod auth_panel;
pub mod chat_panel;
pub mod session_bar;
