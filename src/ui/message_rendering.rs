//! Message list rendering logic.
//!
//! Entries are rendered as `sender: text timestamp` using styled spans only.
//! Field values are never interpreted: control characters (including escape
//! sequences and line breaks) are replaced with spaces before they reach the
//! terminal.

use ratatui::{
    text::{Line, Span},
    widgets::ListItem,
};

use crate::domain::display_list::DisplayEntry;

use super::styles;

/// Builds the single display line for an entry.
pub fn entry_line(entry: &DisplayEntry) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{}:", plain_text(&entry.username)),
            styles::message_sender_style(),
        ),
        Span::raw(" "),
        Span::styled(plain_text(&entry.message), styles::message_text_style()),
        Span::raw(" "),
        Span::styled(plain_text(&entry.timestamp), styles::message_time_style()),
    ])
}

pub fn entry_to_list_item(entry: &DisplayEntry) -> ListItem<'static> {
    ListItem::new(entry_line(entry))
}

/// Returns `value` with every control character replaced by a space.
pub fn plain_text(value: &str) -> String {
    value
        .chars()
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect()
}
