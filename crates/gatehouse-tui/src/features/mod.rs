//! Feature slices of the TUI.

pub mod auth;
