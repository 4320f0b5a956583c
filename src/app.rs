//! Application event loop and screen controller.
//!
//! The `Controller` is the single place screen transitions happen: it
//! forwards raw input to the active screen and interprets the returned
//! `ScreenAction`. The `App` wraps it with the terminal lifecycle and the
//! blocking poll/draw loop.

use crate::api::{ApiClient, Session};
use crate::config::Config;
use crate::screens::{
    LoginScreen, MenuKind, MenuScreen, PromptKind, PromptScreen, Screen, ScreenAction,
    ScreenContext,
};
use crate::tui::Tui;
use crate::ui::ScreenId;
use anyhow::{Context, Result};
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::{debug, info};

/// Screen controller: active screen id plus one instance of each screen.
///
/// Menus exist only once a session does; they are rebuilt from the session
/// on every transition, so no stale cursor or response survives re-entry
/// from the main menu.
pub struct Controller {
    current: ScreenId,
    session: Option<Session>,
    login: LoginScreen,
    main_menu: Option<MenuScreen>,
    postgres_menu: Option<MenuScreen>,
    openai_menu: Option<MenuScreen>,
    aws_menu: Option<MenuScreen>,
    clickup_menu: Option<MenuScreen>,
    user_id_prompt: PromptScreen,
    ask_ai_prompt: PromptScreen,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    /// Create a controller showing the login screen.
    pub fn new() -> Self {
        Self {
            current: ScreenId::Login,
            session: None,
            login: LoginScreen::new(),
            main_menu: None,
            postgres_menu: None,
            openai_menu: None,
            aws_menu: None,
            clickup_menu: None,
            user_id_prompt: PromptScreen::user_id(),
            ask_ai_prompt: PromptScreen::ask_ai(),
        }
    }

    /// The active screen id.
    pub fn current(&self) -> ScreenId {
        self.current
    }

    /// The session held after login, if any.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The login screen (exposed for tests).
    pub fn login_screen(&self) -> &LoginScreen {
        &self.login
    }

    /// A menu screen by id, if it has been constructed.
    pub fn menu(&self, id: ScreenId) -> Option<&MenuScreen> {
        match id {
            ScreenId::MainMenu => self.main_menu.as_ref(),
            ScreenId::PostgresMenu => self.postgres_menu.as_ref(),
            ScreenId::OpenAiMenu => self.openai_menu.as_ref(),
            ScreenId::AwsMenu => self.aws_menu.as_ref(),
            ScreenId::ClickUpMenu => self.clickup_menu.as_ref(),
            _ => None,
        }
    }

    /// Route one input event and apply the resulting transition.
    ///
    /// Returns true when the application should quit. A transition caused
    /// by this event is in place before the call returns, so the next
    /// event is routed against the new screen.
    pub fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<bool> {
        let action = self.active_screen()?.handle_event(event, ctx)?;
        self.apply(action, ctx)
    }

    /// Render the active screen. Pure function of its state.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        if let Ok(screen) = self.active_screen() {
            screen.render(frame, area);
        }
    }

    fn active_screen(&mut self) -> Result<&mut dyn Screen> {
        let screen: &mut dyn Screen = match self.current {
            ScreenId::Login => &mut self.login,
            ScreenId::MainMenu => self.main_menu.as_mut().context("main menu missing")?,
            ScreenId::PostgresMenu => self.postgres_menu.as_mut().context("request menu missing")?,
            ScreenId::OpenAiMenu => self.openai_menu.as_mut().context("OpenAI menu missing")?,
            ScreenId::AwsMenu => self.aws_menu.as_mut().context("AWS menu missing")?,
            ScreenId::ClickUpMenu => self.clickup_menu.as_mut().context("ClickUp menu missing")?,
            ScreenId::AskAi => &mut self.ask_ai_prompt,
            ScreenId::UserIdPrompt => &mut self.user_id_prompt,
        };
        Ok(screen)
    }

    /// Interpret a screen action and perform the transition it names.
    ///
    /// Returns true when the action is `Quit`.
    pub fn apply(&mut self, action: ScreenAction, ctx: &ScreenContext) -> Result<bool> {
        match action {
            ScreenAction::None => {}
            ScreenAction::Quit => return Ok(true),
            ScreenAction::LoggedIn(session) => {
                info!(user = %session.user.name, "session established");
                self.main_menu = Some(MenuScreen::new(MenuKind::Main, session.clone()));
                self.session = Some(session);
                self.current = ScreenId::MainMenu;
            }
            ScreenAction::MenuChosen(index) => {
                let session = self.session.clone().context("menu chosen without session")?;
                debug!(index, "main menu choice");
                self.current = match index {
                    0 => {
                        self.postgres_menu =
                            Some(MenuScreen::new(MenuKind::Postgres, session));
                        ScreenId::PostgresMenu
                    }
                    1 => {
                        self.openai_menu = Some(MenuScreen::new(MenuKind::OpenAi, session));
                        ScreenId::OpenAiMenu
                    }
                    2 => {
                        self.aws_menu = Some(MenuScreen::new(MenuKind::Aws, session));
                        ScreenId::AwsMenu
                    }
                    3 => {
                        self.clickup_menu = Some(MenuScreen::new(MenuKind::ClickUp, session));
                        ScreenId::ClickUpMenu
                    }
                    _ => {
                        self.main_menu = Some(MenuScreen::new(MenuKind::Main, session));
                        ScreenId::MainMenu
                    }
                };
            }
            ScreenAction::Navigate(id) => {
                self.current = id;
                self.active_screen()?.on_enter();
            }
            ScreenAction::Submitted { kind, value } => match kind {
                PromptKind::UserId => {
                    let menu = self
                        .postgres_menu
                        .as_mut()
                        .context("user id submitted without request menu")?;
                    menu.deliver_user_id(&value, ctx);
                    self.current = ScreenId::PostgresMenu;
                }
                PromptKind::AskAi => {
                    let menu = self
                        .openai_menu
                        .as_mut()
                        .context("prompt submitted without OpenAI menu")?;
                    menu.deliver_prompt(&value);
                    self.current = ScreenId::OpenAiMenu;
                }
            },
        }
        Ok(false)
    }
}

/// Main application: terminal, runtime, API client and the controller.
pub struct App {
    config: Config,
    tui: Tui,
    runtime: Runtime,
    api: ApiClient,
    controller: Controller,
}

impl App {
    /// Build the application from a loaded config.
    pub fn new(config: Config) -> Result<Self> {
        let tui = Tui::new()?;
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        let api = ApiClient::new(config.server_url.clone());
        Ok(Self {
            config,
            tui,
            runtime,
            api,
            controller: Controller::new(),
        })
    }

    /// Run the blocking event loop until quit or a fatal error.
    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        let result = self.event_loop();
        // Restore the terminal even when the loop errors out, so a fatal
        // transport error does not leave raw mode enabled.
        let exit = self.tui.exit();
        result.and(exit)
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut titled = self.controller.current();
        self.tui.set_title(titled.title())?;

        loop {
            self.draw()?;

            // One event at a time; any API call triggered by it runs to
            // completion before the next poll.
            if let Some(event) = self.tui.poll_event(Duration::from_millis(250))? {
                let ctx = ScreenContext::new(&self.api, &self.runtime);
                if self.controller.handle_event(event, &ctx)? {
                    break;
                }
                let current = self.controller.current();
                if current != titled {
                    self.tui.set_title(current.title())?;
                    titled = current;
                }
            }
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let controller = &mut self.controller;
        self.tui.terminal_mut().draw(|frame| {
            controller.render(frame, frame.area());
        })?;
        Ok(())
    }
}
