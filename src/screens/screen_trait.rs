//! Screen trait and associated types.
//!
//! Screens own their state; handling an event returns an action instead of
//! mutating controller state, and the controller performs the transition.

use crate::api::{ApiClient, Session};
use crate::ui::ScreenId;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;
use tokio::runtime::Runtime;

/// Context provided for handling events.
///
/// Gives screens access to the API client. Calls are driven to completion
/// on the shared runtime, so the UI blocks for the duration of a request.
pub struct ScreenContext<'a> {
    /// HTTP client for the service API.
    pub api: &'a ApiClient,
    /// Runtime driving the client's futures.
    pub runtime: &'a Runtime,
}

impl<'a> ScreenContext<'a> {
    /// Create a new screen context.
    pub fn new(api: &'a ApiClient, runtime: &'a Runtime) -> Self {
        Self { api, runtime }
    }

    /// Run a client future to completion, blocking the event loop.
    pub fn block_on<F: std::future::Future>(&self, fut: F) -> F::Output {
        self.runtime.block_on(fut)
    }
}

/// Which prompt screen produced a submitted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// "Get User by ID" auxiliary input.
    UserId,
    /// "Ask ChatGPT" free-text prompt.
    AskAi,
}

/// Actions that a screen can return after handling an event.
///
/// The controller interprets these; screens never mutate each other.
#[derive(Debug, Clone)]
pub enum ScreenAction {
    /// No action needed, stay on current screen.
    None,
    /// Navigate to a different screen.
    Navigate(ScreenId),
    /// Login completed; the controller builds the main menu from this.
    LoggedIn(Session),
    /// A main-menu choice was committed.
    MenuChosen(usize),
    /// A prompt screen reported a completed value.
    Submitted { kind: PromptKind, value: String },
    /// Request to quit the application.
    Quit,
}

impl Default for ScreenAction {
    fn default() -> Self {
        Self::None
    }
}

/// Trait for screen controllers.
///
/// Each screen owns its cursor/selection/input state and handles both
/// rendering and events in a self-contained way.
pub trait Screen {
    /// Handle an input event, returning the action the controller should
    /// take. Unrecognized keys are a no-op (`ScreenAction::None`).
    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// Render the screen. Pure function of the screen's own state.
    fn render(&mut self, frame: &mut Frame, area: Rect);

    /// Called when the screen is entered (navigated to).
    fn on_enter(&mut self) {}
}
