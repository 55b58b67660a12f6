//! Application state composition.
//!
//! The top-level state is deliberately small: the auth screen slice plus
//! the bits the runtime and render loop need (config, spinner, quit flag).
//! All mutation happens in the reducer.

use gatehouse_core::config::Config;

use crate::features::auth::ScreenState;

/// Top-level state for the sign-in TUI.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// The auth screen state.
    pub screen: ScreenState,
    /// Client configuration (redirect targets, capability flags).
    pub config: Config,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
}

impl AppState {
    /// Creates the initial state: empty fields, sign-in mode.
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            screen: ScreenState::new(),
            config,
            spinner_frame: 0,
        }
    }
}
