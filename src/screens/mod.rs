//! Screen controllers.
//!
//! Each screen owns its state and implements the `Screen` trait; the
//! controller in `crate::app` routes events and performs transitions.

pub mod login;
pub mod menu;
pub mod prompt;
pub mod screen_trait;

pub use login::LoginScreen;
pub use menu::{MenuKind, MenuScreen};
pub use prompt::PromptScreen;
pub use screen_trait::{PromptKind, Screen, ScreenAction, ScreenContext};
