//! Routed pages.

pub mod home;
