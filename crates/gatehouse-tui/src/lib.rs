//! Full-screen terminal sign-in UI for Gatehouse.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
pub use features::auth;
use gatehouse_core::auth::Session;
use gatehouse_core::config::Config;
pub use runtime::ScreenRuntime;

/// Runs the sign-in screen until it settles.
///
/// Returns the established session on successful sign-in, or `None` when the
/// user leaves the screen without signing in. The caller is the
/// session-change observer; the screen itself never navigates.
///
/// # Errors
/// Returns an error if stderr is not a terminal or terminal setup fails.
pub async fn run_login_screen(config: Config) -> Result<Option<Session>> {
    // The screen requires a terminal to render
    if !stderr().is_terminal() {
        anyhow::bail!("The sign-in screen requires a terminal.");
    }

    let mut runtime = ScreenRuntime::new(config)?;
    runtime.run()
}
