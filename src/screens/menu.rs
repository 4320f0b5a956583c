//! Selectable list screens.
//!
//! One generic `MenuScreen` covers every menu in the application; a
//! `MenuKind` tag supplies the header, the choice labels and what
//! activation means. The main menu emits the chosen index for the
//! controller to map onto a submenu, the Postgres menu (the request list)
//! runs API requests and keeps the formatted result in a response buffer,
//! and the remaining menus only record the selection.

use crate::api::{Session, User};
use crate::screens::screen_trait::{Screen, ScreenAction, ScreenContext};
use crate::styles::{error_style, footer_style, header_style, success_style};
use crate::ui::ScreenId;
use crate::utils::select_cursor::SelectCursor;
use crate::widgets::ChoiceList;
use anyhow::{bail, Context as _, Result};
use chrono::DateTime;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};
use tracing::debug;

/// Request-list choice that needs an auxiliary user id.
const GET_USER_BY_ID: usize = 4;

/// Which menu this screen instance is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    Main,
    Postgres,
    OpenAi,
    Aws,
    ClickUp,
}

impl MenuKind {
    fn header(self) -> &'static str {
        match self {
            MenuKind::Main => "Which API would you like to use?",
            MenuKind::Postgres => "What information would you like to request?",
            MenuKind::OpenAi => "Available OpenAI APIs",
            MenuKind::Aws => "Available AWS APIs",
            MenuKind::ClickUp => "Available ClickUp APIs",
        }
    }

    fn choices(self) -> Vec<String> {
        let labels: &[&str] = match self {
            MenuKind::Main => &["Postgres", "OpenAI", "AWS", "ClickUp"],
            MenuKind::Postgres => &[
                "API Token",
                "API Refresh Token",
                "All Users",
                "This User",
                "Get User by ID",
            ],
            MenuKind::OpenAi => &["Ask ChatGPT", "Available Models", "About"],
            MenuKind::Aws => &[
                "EC2", "S3", "Lambda", "DynamoDB", "CloudWatch", "IAM", "SQS", "SNS", "About",
            ],
            MenuKind::ClickUp => &[
                "Audit Logs",
                "Authorization",
                "Attachments",
                "Comments",
                "Custom Task Types",
                "Custom Fields",
                "Docs",
                "Folders",
                "Goals",
                "Guests",
                "Lists",
                "Members",
                "Privacy & Access",
                "Roles",
                "Shared Hierarchy",
                "Spaces",
                "Tags",
                "Tasks",
                "Task Checklists",
                "Task Relationships",
                "Templates",
                "Workspaces",
                "User Groups (Teams)",
                "Time Tracking",
                "Time Tracking (Legacy)",
                "Users",
                "Views",
                "Webhooks",
                "Chat (Experimental)",
                "About",
            ],
        };
        labels.iter().map(|s| s.to_string()).collect()
    }
}

/// A selectable list screen.
pub struct MenuScreen {
    kind: MenuKind,
    choices: Vec<String>,
    cursor: SelectCursor,
    session: Session,
    response: String,
}

impl MenuScreen {
    /// Create a menu of the given kind, owning a clone of the session.
    pub fn new(kind: MenuKind, session: Session) -> Self {
        let choices = kind.choices();
        Self {
            kind,
            cursor: SelectCursor::new(choices.len()),
            choices,
            session,
            response: String::new(),
        }
    }

    /// Which menu this is.
    pub fn kind(&self) -> MenuKind {
        self.kind
    }

    /// Current cursor index.
    pub fn cursor(&self) -> usize {
        self.cursor.cursor()
    }

    /// Whether `index` is in the selection set.
    pub fn is_selected(&self, index: usize) -> bool {
        self.cursor.is_selected(index)
    }

    /// The response buffer shown under the list.
    pub fn response(&self) -> &str {
        &self.response
    }

    /// Commit the cursor choice.
    fn activate(&mut self, ctx: &ScreenContext) -> ScreenAction {
        let index = self.cursor.activate();
        self.response.clear();
        debug!(kind = ?self.kind, index, "menu choice activated");

        match self.kind {
            MenuKind::Main => ScreenAction::MenuChosen(index),
            MenuKind::Postgres => {
                if index == GET_USER_BY_ID {
                    // Needs auxiliary input; the request runs when the
                    // prompt reports a value.
                    ScreenAction::Navigate(ScreenId::UserIdPrompt)
                } else {
                    self.run_request(index, ctx);
                    ScreenAction::None
                }
            }
            MenuKind::OpenAi if index == 0 => ScreenAction::Navigate(ScreenId::AskAi),
            // Selection-only menus.
            MenuKind::OpenAi | MenuKind::Aws | MenuKind::ClickUp => ScreenAction::None,
        }
    }

    /// Run a request-list choice and store the formatted outcome.
    fn run_request(&mut self, index: usize, ctx: &ScreenContext) {
        self.response = match self.generate_response(index, ctx) {
            Ok(text) => format!("Response:\n{text}"),
            Err(err) => format!("Error generating response: {err:#}"),
        };
    }

    fn generate_response(&self, index: usize, ctx: &ScreenContext) -> Result<String> {
        match index {
            0 => Ok(self.session.token.clone()),
            1 => Ok(self.session.refresh_token.clone()),
            2 => {
                let users = ctx
                    .block_on(ctx.api.list_users(&self.session.token))
                    .context("getting all users")?;
                Ok(format_users(&users))
            }
            3 => Ok(format!(
                "Current User: {} ({})",
                self.session.user.name, self.session.user.id
            )),
            _ => bail!("invalid choice"),
        }
    }

    /// Complete a deferred "Get User by ID" request.
    ///
    /// Called by the controller when the user id prompt submits a value.
    pub fn deliver_user_id(&mut self, id: &str, ctx: &ScreenContext) {
        self.cursor.select(GET_USER_BY_ID);
        let result: Result<String> = if id.trim().is_empty() {
            Err(anyhow::anyhow!("no user ID provided"))
        } else {
            ctx.block_on(ctx.api.get_user(&self.session.token, id.trim()))
                .context("fetching user")
                .map(|user| format_user(&user))
        };
        self.response = match result {
            Ok(text) => format!("Response:\n{text}"),
            Err(err) => format!("Error generating response: {err:#}"),
        };
    }

    /// Record an AskAI prompt in the response buffer.
    ///
    /// There is no OpenAI endpoint on the service API; the submitted
    /// prompt itself is the response.
    pub fn deliver_prompt(&mut self, prompt: &str) {
        self.cursor.select(0);
        self.response = format!("Prompt:\n{prompt}");
    }
}

impl Screen for MenuScreen {
    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
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
            KeyCode::Char('q') => Ok(ScreenAction::Quit),
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor.move_up();
                Ok(ScreenAction::None)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor.move_down();
                Ok(ScreenAction::None)
            }
            KeyCode::Enter | KeyCode::Char(' ') => Ok(self.activate(ctx)),
            _ => Ok(ScreenAction::None),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let list = ChoiceList::new(&self.choices);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // header
                Constraint::Length(1),
                Constraint::Length(list.height()),
                Constraint::Min(1),    // response buffer
                Constraint::Length(1), // footer
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(self.kind.header()).style(header_style()),
            chunks[0],
        );
        frame.render_stateful_widget(list, chunks[2], &mut self.cursor);

        if !self.response.is_empty() {
            let style = if self.response.starts_with("Error") {
                error_style()
            } else {
                success_style()
            };
            frame.render_widget(
                Paragraph::new(self.response.as_str())
                    .style(style)
                    .wrap(Wrap { trim: false }),
                chunks[3],
            );
        }

        frame.render_widget(
            Paragraph::new("Press q to quit.").style(footer_style()),
            chunks[4],
        );
    }
}

/// Format the user list the way the console shows it, in input order.
fn format_users(users: &[User]) -> String {
    let mut out = String::from("All Users:\n");
    for user in users {
        out.push_str(&format!("- {} ({})\n", user.name, user.id));
    }
    out
}

/// Format a single user as the detail block.
fn format_user(user: &User) -> String {
    format!(
        "ID:           {}\n\
         Name:         {}\n\
         Email:        {}\n\
         Online:       {}\n\
         Created:      {} ({})\n\
         Updated:      {} ({})",
        user.id,
        user.name,
        user.email,
        user.online,
        user.created,
        format_epoch(user.created),
        user.updated,
        format_epoch(user.updated),
    )
}

fn format_epoch(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "invalid timestamp".to_string())
}
