//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::events::ConnectivityStatus;

// =============================================================================
// Message list styles
// =============================================================================

/// Style for the sender name (white, bold).
pub fn message_sender_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for message text content.
pub fn message_text_style() -> Style {
    Style::default().fg(Color::White)
}

/// Style for the server-provided timestamp (dimmed, like a small muted label).
pub fn message_time_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for the hint shown while no message has arrived yet.
pub fn empty_list_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

pub fn panel_border_style() -> Style {
    Style::default().fg(Color::Gray)
}

// =============================================================================
// Input styles
// =============================================================================

pub fn input_prompt_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn input_placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

// =============================================================================
// Status bar styles
// =============================================================================

pub fn connectivity_style(status: ConnectivityStatus) -> Style {
    let color = match status {
        ConnectivityStatus::Connecting => Color::Yellow,
        ConnectivityStatus::Connected => Color::Green,
        ConnectivityStatus::Disconnected => Color::Red,
    };
    Style::default().fg(color)
}

pub fn status_hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
