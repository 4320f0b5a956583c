//! Text input widget for rendering `TextInput` instances.
//!
//! Centralizes styling for input fields: focused/unfocused borders,
//! placeholder text, password masking and cursor positioning.

use crate::styles::{
    focused_border_style, input_placeholder_style, input_text_style, unfocused_border_style,
};
use crate::utils::text_input::TextInput;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// A widget for rendering a `TextInput` with consistent styling.
///
/// # Example
/// ```
/// use apiconsole::widgets::TextInputWidget;
/// use apiconsole::utils::TextInput;
///
/// let input = TextInput::with_text("alice@example.com");
/// let widget = TextInputWidget::new(&input)
///     .title("Email")
///     .focused(true);
/// // frame.render_text_input_widget(widget, area);
/// ```
pub struct TextInputWidget<'a> {
    /// Reference to the text input state
    input: &'a TextInput,
    /// Title for the input field
    title: Option<&'a str>,
    /// Placeholder text when empty
    placeholder: Option<&'a str>,
    /// Whether the input is focused
    focused: bool,
    /// Whether to mask the text (for passwords)
    masked: bool,
}

impl<'a> TextInputWidget<'a> {
    /// Create a new text input widget.
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            title: None,
            placeholder: None,
            focused: false,
            masked: false,
        }
    }

    /// Set the title for the input field.
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Set the placeholder text.
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Set whether the input is focused.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set whether to mask the text (for passwords).
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    /// Get the display text (actual text, masked text, or placeholder).
    fn display_text(&self) -> String {
        let text = self.input.text();

        if text.is_empty() {
            self.placeholder.unwrap_or("").to_string()
        } else if self.masked {
            // Mask with bullets (same length as actual text)
            "•".repeat(text.chars().count())
        } else {
            text.to_string()
        }
    }

    /// Get the text style based on state.
    fn text_style(&self) -> Style {
        if self.input.is_empty() {
            input_placeholder_style()
        } else {
            input_text_style()
        }
    }

    /// Get the border style based on state.
    fn border_style(&self) -> Style {
        if self.focused {
            focused_border_style()
        } else {
            unfocused_border_style()
        }
    }

    /// Create the block for the input.
    fn create_block(&self) -> Block<'a> {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.border_style());

        if let Some(title) = self.title {
            block = block.title(format!(" {title} "));
        }

        block
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.create_block();
        let paragraph = Paragraph::new(self.display_text())
            .block(block)
            .style(self.text_style());
        paragraph.render(area, buf);
    }
}

/// Extension trait for `Frame` to render a `TextInputWidget` with cursor
/// support.
///
/// The `Widget` trait has no access to the frame, so cursor positioning
/// goes through this extension.
pub trait TextInputWidgetExt {
    /// Render a `TextInputWidget` and set the cursor position if focused.
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect);
}

impl TextInputWidgetExt for Frame<'_> {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect) {
        let focused = widget.focused;
        let cursor_pos = widget.input.cursor();
        let text_len = widget.input.text().chars().count();

        // Calculate block inner area for cursor positioning
        let block = widget.create_block();
        let inner = block.inner(area);

        self.render_widget(widget, area);

        if focused {
            let clamped_cursor = cursor_pos.min(text_len);
            let x = inner.x + clamped_cursor.min(inner.width as usize) as u16;
            let y = inner.y;
            self.set_cursor_position((x, y));
        }
    }
}
