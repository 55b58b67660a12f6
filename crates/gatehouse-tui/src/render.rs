//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference and draw to a
//! ratatui Frame. They never mutate state or return effects.

use ratatui::Frame;

use crate::features::auth;
use crate::state::AppState;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    auth::render_screen(frame, &app.screen, &app.config, app.spinner_frame);
}
