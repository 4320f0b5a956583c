//! apiconsole - a keyboard-driven terminal console for a local service API.
//!
//! This library provides the screen controller, the individual screens,
//! and the HTTP client used by the `apiconsole` binary.

// Core modules
pub mod api;
pub mod app;
pub mod config;
pub mod screens;
pub mod styles;
pub mod tui;
pub mod ui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use api::{ApiClient, Session, User};
pub use app::Controller;
pub use config::Config;
