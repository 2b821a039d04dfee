//! Small helpers that are not state or networking.

pub mod routing;
