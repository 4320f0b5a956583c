use anyhow::{Context, Result};
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};
use tracing::info;
use tracing_subscriber::EnvFilter;

use apiconsole::app::App;
use apiconsole::config::{self, Config};
use apiconsole::styles::{init_theme, ThemeType};

/// Terminal console for a user service API.
#[derive(Parser, Debug)]
#[command(name = "apiconsole", version, about)]
struct Cli {
    /// Base URL of the API server (overrides the config file)
    #[arg(long)]
    server: Option<String>,

    /// UI theme: dark, light or no-color (overrides the config file)
    #[arg(long)]
    theme: Option<String>,

    /// Log filter, e.g. "info" or "apiconsole=debug"
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Restore the terminal before the default hook prints the panic,
    // otherwise the message is lost to the alternate screen.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let log_dir = config::log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log dir: {}", log_dir.display()))?;
    let file_appender = tracing_appender::rolling::daily(&log_dir, "apiconsole.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone())),
        )
        .init();

    let config_path = config::config_path();
    let mut config = Config::load_or_create(&config_path)?;
    if let Some(server) = cli.server {
        config.server_url = server;
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }

    let theme_type = config.theme.parse().unwrap_or(ThemeType::Dark);
    init_theme(theme_type);

    info!(server = %config.server_url, "starting");
    App::new(config)?.run()
}
