//! Theme and style system for apiconsole
//!
//! Provides consistent styling across the application with support for
//! dark, light and colorless terminals.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;
use std::sync::RwLock;

/// Cursor marker shown next to the row the cursor is on
pub const CURSOR_MARKER: &str = ">";

/// Global theme instance (supports runtime updates)
static THEME: RwLock<Theme> = RwLock::new(Theme {
    theme_type: ThemeType::Dark,
    primary: Color::Cyan,
    success: Color::Green,
    error: Color::Red,
    text: Color::White,
    text_muted: Color::DarkGray,
    border: Color::DarkGray,
    border_focused: Color::Cyan,
    highlight_bg: Color::DarkGray,
});

/// Initialize the global theme (call once at startup, or to update at runtime)
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap();
    *theme = Theme::new(theme_type);
}

/// Get the current theme
pub fn theme() -> Theme {
    THEME.read().unwrap().clone()
}

/// Theme type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// Disable all UI colors (equivalent to `NO_COLOR=1`)
    NoColor,
}

impl FromStr for ThemeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "light" => ThemeType::Light,
            "nocolor" | "no-color" | "no_color" => ThemeType::NoColor,
            _ => ThemeType::Dark,
        })
    }
}

/// Color palette for the application
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme type
    pub theme_type: ThemeType,
    /// Main accent color (borders, titles, key UI elements)
    pub primary: Color,
    /// Success states (logged in, response received)
    pub success: Color,
    /// Error states (failed request, validation message)
    pub error: Color,
    /// Regular text
    pub text: Color,
    /// De-emphasized text (hints, footers)
    pub text_muted: Color,
    /// Unfocused borders
    pub border: Color,
    /// Focused borders
    pub border_focused: Color,
    /// Background of the highlighted list row
    pub highlight_bg: Color,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self {
                theme_type,
                primary: Color::Cyan,
                success: Color::Green,
                error: Color::Red,
                text: Color::White,
                text_muted: Color::DarkGray,
                border: Color::DarkGray,
                border_focused: Color::Cyan,
                highlight_bg: Color::DarkGray,
            },
            ThemeType::Light => Self {
                theme_type,
                primary: Color::Blue,
                success: Color::Green,
                error: Color::Red,
                text: Color::Black,
                text_muted: Color::Gray,
                border: Color::Gray,
                border_focused: Color::Blue,
                highlight_bg: Color::Gray,
            },
            ThemeType::NoColor => Self {
                theme_type,
                primary: Color::Reset,
                success: Color::Reset,
                error: Color::Reset,
                text: Color::Reset,
                text_muted: Color::Reset,
                border: Color::Reset,
                border_focused: Color::Reset,
                highlight_bg: Color::Reset,
            },
        }
    }
}

/// Style for the title/header line of a screen
pub fn header_style() -> Style {
    Style::default()
        .fg(theme().primary)
        .add_modifier(Modifier::BOLD)
}

/// Style for footer hints ("Press q to quit.")
pub fn footer_style() -> Style {
    Style::default().fg(theme().text_muted)
}

/// Style for error text (inline validation, failed requests)
pub fn error_style() -> Style {
    Style::default().fg(theme().error)
}

/// Style for successful response text
pub fn success_style() -> Style {
    Style::default().fg(theme().success)
}

/// Style for regular input text
pub fn input_text_style() -> Style {
    Style::default().fg(theme().text)
}

/// Style for placeholder text in empty inputs
pub fn input_placeholder_style() -> Style {
    Style::default().fg(theme().text_muted)
}

/// Border style for a focused input
pub fn focused_border_style() -> Style {
    Style::default().fg(theme().border_focused)
}

/// Border style for an unfocused input
pub fn unfocused_border_style() -> Style {
    Style::default().fg(theme().border)
}
