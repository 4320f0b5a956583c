//! Login screen controller.
//!
//! Two labeled fields (email, masked password) plus a submit slot. Submit
//! validates both fields non-empty, then performs the login call; the UI
//! blocks until the server answers. Auth failures stay on this screen with
//! an inline message, transport failures are fatal.

use crate::api::ApiError;
use crate::screens::screen_trait::{Screen, ScreenAction, ScreenContext};
use crate::styles::{error_style, footer_style, header_style, theme};
use crate::utils::form::{Form, FormField};
use crate::widgets::{TextInputWidget, TextInputWidgetExt};
use anyhow::{Context, Result};
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tracing::info;

const EMAIL_FIELD: usize = 0;
const PASSWORD_FIELD: usize = 1;

/// Cursor display mode, cycled with ctrl+r.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorMode {
    #[default]
    Blink,
    Static,
    Hide,
}

impl CursorMode {
    fn next(self) -> Self {
        match self {
            CursorMode::Blink => CursorMode::Static,
            CursorMode::Static => CursorMode::Hide,
            CursorMode::Hide => CursorMode::Blink,
        }
    }

    fn label(self) -> &'static str {
        match self {
            CursorMode::Blink => "blink",
            CursorMode::Static => "static",
            CursorMode::Hide => "hide",
        }
    }
}

/// Login screen controller.
pub struct LoginScreen {
    form: Form,
    cursor_mode: CursorMode,
    message: Option<String>,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginScreen {
    /// Create a new login screen with empty fields.
    pub fn new() -> Self {
        Self {
            form: Form::new()
                .add_field(FormField::new("Email").with_char_limit(64))
                .add_field(FormField::new("Password").masked().with_char_limit(32)),
            cursor_mode: CursorMode::default(),
            message: None,
        }
    }

    /// Current inline message (validation or auth failure), if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Current focus index (fields, then the submit slot).
    pub fn focus(&self) -> usize {
        self.form.focus()
    }

    /// Cursor display mode.
    pub fn cursor_mode(&self) -> CursorMode {
        self.cursor_mode
    }

    /// Field contents, exposed for tests.
    pub fn field_value(&self, index: usize) -> &str {
        self.form.value(index)
    }

    /// Validate and perform the login call.
    fn submit(&mut self, ctx: &ScreenContext) -> Result<ScreenAction> {
        let email = self.form.value(EMAIL_FIELD).to_string();
        let password = self.form.value(PASSWORD_FIELD).to_string();

        // Empty credentials never reach the network. Whitespace-only input
        // counts as empty, but the values themselves go out exactly as
        // typed; a password may carry edge spaces.
        if self.form.trimmed(EMAIL_FIELD).is_empty()
            || self.form.trimmed(PASSWORD_FIELD).is_empty()
        {
            self.message = Some("Email and password cannot be empty.".to_string());
            return Ok(ScreenAction::None);
        }

        match ctx.block_on(ctx.api.login(&email, &password)) {
            Ok(session) => {
                info!(user = %session.user.name, "authenticated");
                // Field contents are discarded on transition.
                self.form.reset();
                self.message = None;
                Ok(ScreenAction::LoggedIn(session))
            }
            Err(err @ ApiError::Auth { .. }) => {
                self.message = Some(format!("Login failed: {err}"));
                Ok(ScreenAction::None)
            }
            // Transport and decode failures leave no usable screen to
            // return to; bubble out of the event loop.
            Err(err) => Err(err).context("login request"),
        }
    }
}

impl Screen for LoginScreen {
    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ScreenAction::None);
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => return Ok(ScreenAction::Quit),
                KeyCode::Char('r') => {
                    self.cursor_mode = self.cursor_mode.next();
                    return Ok(ScreenAction::None);
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Esc => Ok(ScreenAction::Quit),
            KeyCode::Enter if self.form.submit_focused() => self.submit(ctx),
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
                Constraint::Length(3), // email
                Constraint::Length(3), // password
                Constraint::Length(1), // submit
                Constraint::Length(1), // message
                Constraint::Min(0),
                Constraint::Length(1), // help
            ])
            .split(area);

        frame.render_widget(Paragraph::new("Sign in").style(header_style()), chunks[0]);

        for (i, field) in self.form.fields().iter().enumerate() {
            let focused = self.form.focus() == i;
            let widget = TextInputWidget::new(&field.input)
                .title(&field.label)
                .placeholder(&field.placeholder)
                .masked(field.masked)
                .focused(focused);
            if focused && self.cursor_mode != CursorMode::Hide {
                frame.render_text_input_widget(widget, chunks[1 + i]);
            } else {
                frame.render_widget(widget, chunks[1 + i]);
            }
        }

        let submit_style = if self.form.submit_focused() {
            Style::default()
                .fg(theme().primary)
                .add_modifier(Modifier::BOLD)
        } else {
            footer_style()
        };
        frame.render_widget(Paragraph::new("[ Submit ]").style(submit_style), chunks[3]);

        if let Some(message) = &self.message {
            frame.render_widget(
                Paragraph::new(message.as_str()).style(error_style()),
                chunks[4],
            );
        }

        let help = format!(
            "cursor mode is {} (ctrl+r to change style)",
            self.cursor_mode.label()
        );
        frame.render_widget(Paragraph::new(help).style(footer_style()), chunks[6]);
    }
}
