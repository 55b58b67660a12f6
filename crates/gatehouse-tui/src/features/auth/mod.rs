//! Auth screen feature: state, reducer, messages, view.

pub mod messages;
pub mod render;
pub mod state;
pub mod update;

pub use render::render_screen;
pub use state::{FocusField, ScreenState};
pub use update::{handle_auth_event, handle_key, handle_paste};
