//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `chat`) so individual components can
//! depend on small focused models. Each module pairs a plain state struct
//! carrying pure transitions with the async actions that drive it.

pub mod chat;
pub mod session;
