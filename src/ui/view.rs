use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListState, Paragraph},
    Frame,
};

use crate::domain::shell_state::ShellState;

use super::message_input::render_message_input;
use super::message_rendering::{entry_to_list_item, plain_text};
use super::styles;

const EMPTY_LIST_HINT: &str = "No messages yet.";
const KEY_HINT: &str = "Enter: send  Esc: quit";

pub fn render(frame: &mut Frame<'_>, state: &ShellState) {
    let [messages_area, input_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    render_messages_panel(frame, messages_area, state);
    render_message_input(frame, input_area, state.message_input());
    frame.render_widget(Paragraph::new(status_line(state)), status_area);
}

fn render_messages_panel(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let block = Block::default()
        .title(panel_title(state))
        .borders(Borders::ALL)
        .border_style(styles::panel_border_style());

    let display_list = state.display_list();
    if display_list.is_empty() {
        let hint = Paragraph::new(Span::styled(EMPTY_LIST_HINT, styles::empty_list_style()))
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<_> = display_list
        .entries()
        .iter()
        .map(entry_to_list_item)
        .collect();
    let list = List::new(items).block(block);

    // Selecting the newest entry makes the list scroll it into view.
    let mut list_state = ListState::default();
    list_state.select(display_list.scroll_index());
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn panel_title(state: &ShellState) -> String {
    format!(
        "Room {} ({})",
        plain_text(state.room().room()),
        state.display_list().len()
    )
}

fn status_line(state: &ShellState) -> Line<'static> {
    let status = state.connectivity_status();

    Line::from(vec![
        Span::styled(
            format!("[{}]", status.as_label()),
            styles::connectivity_style(status),
        ),
        Span::raw(" "),
        Span::styled(KEY_HINT.to_owned(), styles::status_hint_style()),
    ])
}
