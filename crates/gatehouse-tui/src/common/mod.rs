//! Shared building blocks for the TUI.

mod field;

pub use field::FieldBuffer;
