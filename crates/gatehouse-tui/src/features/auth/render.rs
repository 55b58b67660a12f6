//! Auth feature view.
//!
//! Rendering functions for the sign-in screen: a centered card with labeled
//! fields, inline field errors, the status banner, and key hints. Pure over
//! the screen state.

use gatehouse_core::config::Config;
use gatehouse_core::validate::AuthMode;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::messages::{self, MessageStyle};
use super::state::{FocusField, ScreenState};
use crate::common::FieldBuffer;

/// Spinner frames for the loading line.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

const CARD_WIDTH: u16 = 58;

/// Renders the sign-in screen.
pub fn render_screen(
    frame: &mut Frame,
    screen: &ScreenState,
    config: &Config,
    spinner_frame: usize,
) {
    let area = frame.area();
    let card_width = CARD_WIDTH.min(area.width.saturating_sub(2));
    let inner_width = card_width.saturating_sub(4);

    let lines = screen_lines(screen, config, spinner_frame, inner_width);
    let card_height = (lines.len() as u16 + 2).min(area.height);
    let card = centered_card_area(area, card_width, card_height);

    render_card_container(frame, card, screen_title(screen.mode));

    let inner = Rect::new(
        card.x + 2,
        card.y + 1,
        card.width.saturating_sub(4),
        card.height.saturating_sub(2),
    );
    frame.render_widget(Paragraph::new(lines), inner);
}

fn screen_title(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::SignIn => "Welcome back",
        AuthMode::SignUp => "Create your account",
    }
}

fn screen_lines(
    screen: &ScreenState,
    config: &Config,
    spinner_frame: usize,
    inner_width: u16,
) -> Vec<Line<'static>> {
    let mode_hint = match screen.mode {
        AuthMode::SignIn => "Don't have an account? Ctrl+T to sign up",
        AuthMode::SignUp => "Already have an account? Ctrl+T to sign in",
    };

    let mut lines = vec![
        Line::from(Span::styled(mode_hint, Style::default().fg(Color::DarkGray))),
        Line::from(""),
    ];

    lines.extend(field_lines(
        "Email address",
        &screen.email,
        screen.focus == FocusField::Email,
        false,
        screen.field_errors.email.as_deref(),
        inner_width,
    ));
    lines.extend(field_lines(
        "Password",
        &screen.password,
        screen.focus == FocusField::Password,
        !screen.show_password,
        screen.field_errors.password.as_deref(),
        inner_width,
    ));
    if screen.mode == AuthMode::SignUp {
        lines.extend(field_lines(
            "Confirm password",
            &screen.confirm_password,
            screen.focus == FocusField::ConfirmPassword,
            true,
            screen.field_errors.confirm_password.as_deref(),
            inner_width,
        ));
    }

    lines.push(Line::from(""));
    lines.push(activity_line(screen, spinner_frame, inner_width));
    lines.push(Line::from(""));
    lines.push(hints_line(screen.mode, config));

    lines
}

/// The line between the form and the hints: spinner while a submission is in
/// flight, the status banner once one has settled, blank otherwise.
fn activity_line(screen: &ScreenState, spinner_frame: usize, inner_width: u16) -> Line<'static> {
    if screen.loading {
        let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
        return Line::from(Span::styled(
            format!("{spinner} Processing..."),
            Style::default().fg(Color::Yellow),
        ));
    }

    match &screen.status {
        Some(status) => {
            let color = match messages::classify(status) {
                MessageStyle::Success => Color::Green,
                MessageStyle::Error => Color::Red,
            };
            Line::from(Span::styled(
                truncate_to_width(status, inner_width as usize),
                Style::default().fg(color),
            ))
        }
        None => Line::from(""),
    }
}

fn field_lines(
    label: &str,
    field: &FieldBuffer,
    focused: bool,
    masked: bool,
    error: Option<&str>,
    inner_width: u16,
) -> Vec<Line<'static>> {
    let label_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let display_value = if masked {
        "•".repeat(field.char_count())
    } else {
        field.value().to_string()
    };
    // Keep the tail visible while typing near the right edge.
    let max_value_width = inner_width.saturating_sub(3) as usize;
    let display_value = truncate_start_to_width(&display_value, max_value_width);

    let mut value_spans = vec![
        Span::styled("> ", Style::default().fg(Color::DarkGray)),
        Span::styled(display_value, Style::default().fg(Color::White)),
    ];
    if focused {
        value_spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
    }

    let mut lines = vec![
        Line::from(Span::styled(label.to_string(), label_style)),
        Line::from(value_spans),
    ];
    if let Some(error) = error {
        lines.push(Line::from(Span::styled(
            format!("  {}", truncate_to_width(error, inner_width as usize)),
            Style::default().fg(Color::Red),
        )));
    }
    lines
}

fn hints_line(mode: AuthMode, config: &Config) -> Line<'static> {
    let mut hints: Vec<(&str, &str)> = vec![("Enter", "submit"), ("^T", "switch")];
    if mode == AuthMode::SignIn {
        hints.push(("^R", "reset password"));
    }
    hints.push(("^P", "show password"));
    if config.google_oauth {
        hints.push(("^G", "Google"));
    }
    hints.push(("Esc", "quit"));

    let mut spans = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            format!(" {action}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Calculates the card area, centered in the terminal.
fn centered_card_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Clears the background and draws the card border and title.
fn render_card_container(frame: &mut Frame, area: Rect, title: &str) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, area);
}

/// Truncates `s` to `max_width` display columns, keeping the head.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.to_string().width();
        if used + w + 1 > max_width {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Truncates `s` to `max_width` display columns, keeping the tail.
fn truncate_start_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::new();
    let mut used = 1; // the leading ellipsis
    for c in chars.iter().rev() {
        let w = c.to_string().width();
        if used + w > max_width {
            break;
        }
        used += w;
        out.insert(0, *c);
    }
    format!("…{out}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_strings() {
        assert_eq!(truncate_to_width("abc", 10), "abc");
        assert_eq!(truncate_start_to_width("abc", 10), "abc");
    }

    #[test]
    fn test_truncate_to_width_keeps_head() {
        assert_eq!(truncate_to_width("abcdefgh", 5), "abcd…");
    }

    #[test]
    fn test_truncate_start_keeps_tail() {
        assert_eq!(truncate_start_to_width("abcdefgh", 5), "…efgh");
    }
}
