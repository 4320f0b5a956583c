//! Screen identifiers shared between the controller and the screens.

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Login,
    MainMenu,
    PostgresMenu,
    OpenAiMenu,
    AwsMenu,
    ClickUpMenu,
    AskAi,
    UserIdPrompt,
}

impl ScreenId {
    /// Window/header title for the screen.
    pub fn title(self) -> &'static str {
        match self {
            ScreenId::Login => "Sign In",
            ScreenId::MainMenu => "Available APIs",
            ScreenId::PostgresMenu => "Request List",
            ScreenId::OpenAiMenu => "OpenAI APIs",
            ScreenId::AwsMenu => "AWS APIs",
            ScreenId::ClickUpMenu => "ClickUp APIs",
            ScreenId::AskAi => "Ask ChatGPT",
            ScreenId::UserIdPrompt => "User Lookup",
        }
    }
}
