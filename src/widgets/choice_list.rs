//! Choice list widget shared by every menu screen.
//!
//! Renders one line per choice in the original console format: a cursor
//! marker, a toggle marker and the label (`> [x] All Users`). The cursor
//! row is highlighted; everything else is left to the screens (header,
//! response buffer, footer hint).

use crate::styles::{theme, CURSOR_MARKER};
use crate::utils::select_cursor::SelectCursor;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

/// Widget rendering a list of selectable choice labels.
#[derive(Debug, Clone)]
pub struct ChoiceList<'a> {
    choices: &'a [String],
}

impl<'a> ChoiceList<'a> {
    /// Create a new choice list over the given labels.
    pub fn new(choices: &'a [String]) -> Self {
        Self { choices }
    }

    /// Number of terminal rows the list needs.
    pub fn height(&self) -> u16 {
        self.choices.len() as u16
    }

    /// Format a single row the way the terminal shows it.
    ///
    /// Split out so the row shape is testable without a buffer.
    pub fn format_row(label: &str, under_cursor: bool, selected: bool) -> String {
        let cursor = if under_cursor { CURSOR_MARKER } else { " " };
        let checked = if selected { "x" } else { " " };
        format!("{cursor} [{checked}] {label}")
    }
}

impl StatefulWidget for ChoiceList<'_> {
    type State = SelectCursor;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let t = theme();

        for (i, label) in self.choices.iter().enumerate() {
            let y = area.y + i as u16;
            if y >= area.y + area.height {
                break;
            }

            let under_cursor = state.cursor() == i;
            let row = Self::format_row(label, under_cursor, state.is_selected(i));

            let style = if under_cursor {
                Style::default()
                    .fg(t.primary)
                    .bg(t.highlight_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(t.text)
            };

            let line = Line::from(Span::styled(row, style));
            Widget::render(line, Rect::new(area.x, y, area.width, 1), buf);
        }
    }
}
