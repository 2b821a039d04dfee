//! HTTP transport layer: wire types and REST calls.

pub mod api;
pub mod types;
