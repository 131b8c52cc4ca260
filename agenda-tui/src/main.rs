mod agenda;
mod api;
mod app;
mod bootstrap;
mod cli;
mod config;
mod logging;
mod preferences;
mod runtime;
mod time_utils;
mod types;
mod ui;

use anyhow::{Context, Result};
use api::ApiClient;
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::AgendaConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use preferences::{PreferenceStore, Preferences};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use types::Role;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::ConfigPath => {
            let path = AgendaConfig::ensure_exists()?;
            println!("{}", path.display());
            Ok(())
        }
        Commands::Run => {
            let cfg = AgendaConfig::load()?;
            let client = ApiClient::new(&cfg.api_url, cfg.session_token.as_deref())?;
            run(cfg, client).await
        }
        Commands::Dev { supervisor } => {
            let cfg = AgendaConfig::load()?;
            let role = if supervisor {
                Role::Supervisor
            } else {
                Role::Employee
            };
            run(cfg, ApiClient::dev(role)?).await
        }
    }
}

async fn run(cfg: AgendaConfig, client: ApiClient) -> Result<()> {
    let log_path = logging::init_logging()?;
    tracing::info!(
        dev = client.is_dev(),
        api_url = %cfg.api_url,
        "Starting agenda-tui"
    );

    let me = client
        .me()
        .await
        .context("Could not fetch the signed-in user. Is session_token set in the config?")?;
    tracing::info!("Signed in as {} ({})", me.display_name(), me.role.label());

    let defaults = Preferences::defaults(cfg.prefer_dark);
    let store = PreferenceStore::new(PreferenceStore::default_path()?, defaults);
    let prefs = match store.load() {
        Ok(prefs) => prefs,
        Err(e) => {
            tracing::warn!("Could not read preferences, using defaults: {e:#}");
            defaults
        }
    };

    let mut app = App::new(me, prefs, store, time_utils::local_today());
    bootstrap::initialize_app_state(&mut app, &client).await;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let refresh_interval = Duration::from_secs(cfg.refresh_interval_secs.max(1));
    let res = runtime::run_app(&mut terminal, &mut app, &client, refresh_interval).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("Exited with error: {err:#}");
        eprintln!("Error: {err:?}");
        eprintln!("Log file: {}", log_path.display());
    }

    Ok(())
}
