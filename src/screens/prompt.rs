//! Single-value prompt screens.
//!
//! Used when a menu choice needs auxiliary text before its request can run:
//! the user id for "Get User by ID" and the free-text prompt for
//! "Ask ChatGPT". The screen validates non-empty input and reports the
//! value back through `ScreenAction::Submitted`; the owning menu runs the
//! deferred request.

use crate::screens::screen_trait::{PromptKind, Screen, ScreenAction, ScreenContext};
use crate::styles::{error_style, footer_style, header_style, theme};
use crate::utils::form::{Form, FormField};
use crate::widgets::{TextInputWidget, TextInputWidgetExt};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// A one-field input screen with a submit slot.
pub struct PromptScreen {
    kind: PromptKind,
    title: String,
    form: Form,
    message: Option<String>,
}

impl PromptScreen {
    /// Prompt for the user id of the deferred "Get User by ID" request.
    pub fn user_id() -> Self {
        Self::new(PromptKind::UserId, "Look up a user", "User ID")
    }

    /// Prompt for the AskAI free-text question.
    pub fn ask_ai() -> Self {
        Self::new(PromptKind::AskAi, "Ask ChatGPT", "Prompt")
    }

    fn new(kind: PromptKind, title: &str, label: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            form: Form::new().add_field(FormField::new(label).with_char_limit(64)),
            message: None,
        }
    }

    /// Current inline validation message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Current focus index (0 = field, 1 = submit slot).
    pub fn focus(&self) -> usize {
        self.form.focus()
    }

    fn submit(&mut self) -> ScreenAction {
        let value = self.form.trimmed(0).to_string();
        if value.is_empty() {
            self.message = Some("Input cannot be empty.".to_string());
            return ScreenAction::None;
        }
        ScreenAction::Submitted {
            kind: self.kind,
            value,
        }
    }
}

impl Screen for PromptScreen {
    fn handle_event(&mut self, event: Event, _ctx: &ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ScreenAction::None);
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(ScreenAction::Quit);
        }

        match key.code {
            KeyCode::Esc => Ok(ScreenAction::Quit),
            KeyCode::Enter if self.form.submit_focused() => Ok(self.submit()),
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => {
                self.form.focus_next();
                Ok(ScreenAction::None)
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus_prev();
                Ok(ScreenAction::None)
            }
            code => {
                self.form.handle_key(code);
                Ok(ScreenAction::None)
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Length(3), // input
                Constraint::Length(1), // submit
                Constraint::Length(1), // message
                Constraint::Min(0),
                Constraint::Length(1), // footer
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(self.title.as_str()).style(header_style()),
            chunks[0],
        );

        let field = &self.form.fields()[0];
        let focused = self.form.focus() == 0;
        let widget = TextInputWidget::new(&field.input)
            .title(&field.label)
            .placeholder(&field.placeholder)
            .focused(focused);
        if focused {
            frame.render_text_input_widget(widget, chunks[1]);
        } else {
            frame.render_widget(widget, chunks[1]);
        }

        let submit_style = if self.form.submit_focused() {
            Style::default()
                .fg(theme().primary)
                .add_modifier(Modifier::BOLD)
        } else {
            footer_style()
        };
        frame.render_widget(Paragraph::new("[ Submit ]").style(submit_style), chunks[2]);

        if let Some(message) = &self.message {
            frame.render_widget(
                Paragraph::new(message.as_str()).style(error_style()),
                chunks[3],
            );
        }

        frame.render_widget(
            Paragraph::new("esc to quit").style(footer_style()),
            chunks[5],
        );
    }

    fn on_enter(&mut self) {
        self.form.reset();
        self.message = None;
    }
}
