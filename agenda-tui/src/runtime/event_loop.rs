use crate::api::ApiClient;
use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use super::action_queue::{channel, Action};
use super::actions::run_action;
use super::views::handle_key;

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &ApiClient,
    refresh_interval: Duration,
) -> Result<()> {
    let mut last_refresh = Instant::now();
    let (action_tx, mut action_rx) = channel();

    loop {
        app.prune_notifications(Instant::now());
        terminal.draw(|f| ui::render(f, app))?;

        app.tick_loading(Instant::now());

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(key, app, &action_tx);
                }
            }
        }

        // Background polling, paused while a modal is open.
        if last_refresh.elapsed() >= refresh_interval && !app.has_overlay() {
            let _ = action_tx.send(Action::RefreshBackground);
            last_refresh = Instant::now();
        }

        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app, client).await?;
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
