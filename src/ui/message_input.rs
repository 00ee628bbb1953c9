//! Message input field rendering.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::domain::message_input_state::MessageInputState;

use super::{message_rendering::plain_text, styles};

const PLACEHOLDER_TEXT: &str = "Type a message and press Enter...";

const PROMPT_SYMBOL: &str = "> ";

pub fn render_message_input(frame: &mut Frame<'_>, area: Rect, input_state: &MessageInputState) {
    let paragraph = Paragraph::new(build_input_line(input_state)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::panel_border_style()),
    );

    frame.render_widget(paragraph, area);

    let (cursor_x, cursor_y) = cursor_position(area, input_state);
    frame.set_cursor_position((cursor_x, cursor_y));
}

fn build_input_line(input_state: &MessageInputState) -> Line<'static> {
    let prompt = Span::styled(PROMPT_SYMBOL.to_owned(), styles::input_prompt_style());

    if input_state.is_empty() {
        Line::from(vec![
            prompt,
            Span::styled(
                PLACEHOLDER_TEXT.to_owned(),
                styles::input_placeholder_style(),
            ),
        ])
    } else {
        Line::from(vec![
            prompt,
            Span::styled(plain_text(input_state.text()), styles::input_text_style()),
        ])
    }
}

/// Terminal cell for the cursor: inside the border, after the prompt and the
/// display width of the text left of the cursor, clamped to the field.
fn cursor_position(area: Rect, input_state: &MessageInputState) -> (u16, u16) {
    let typed_width = input_state.text_before_cursor().width();
    let offset = PROMPT_SYMBOL
        .width()
        .saturating_add(typed_width)
        .min(u16::MAX as usize) as u16;
    let max_x = area.right().saturating_sub(2).max(area.x);

    let x = area.x.saturating_add(1).saturating_add(offset).min(max_x);
    let y = area.y.saturating_add(1);
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> MessageInputState {
        let mut state = MessageInputState::default();
        for ch in text.chars() {
            state.insert_char(ch);
        }
        state
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn shows_placeholder_when_empty() {
        let line = build_input_line(&MessageInputState::default());
        let text = line_text(&line);

        assert!(text.starts_with(PROMPT_SYMBOL));
        assert!(text.contains(PLACEHOLDER_TEXT));
    }

    #[test]
    fn shows_typed_text_instead_of_placeholder() {
        let line = build_input_line(&typed("Hi"));
        let text = line_text(&line);

        assert_eq!(text, "> Hi");
    }

    #[test]
    fn cursor_follows_display_width_of_wide_characters() {
        let area = Rect::new(0, 10, 40, 3);

        assert_eq!(cursor_position(area, &typed("ab")), (5, 11));
        assert_eq!(cursor_position(area, &typed("日本")), (7, 11));
    }

    #[test]
    fn cursor_is_clamped_inside_the_field() {
        let area = Rect::new(0, 0, 10, 3);
        let (x, _) = cursor_position(area, &typed("a very long message"));

        assert_eq!(x, 8);
    }
}
