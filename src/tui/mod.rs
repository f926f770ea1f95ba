//! Terminal front end.

mod app;
mod cues;
mod input;
mod ui;
mod welcome;

pub use app::{App, AppEvent, COMPUTER_DELAY, Screen};

use crate::game::GameMachine;
use crate::store::JsonFileStore;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

/// Runs the TUI until the user quits.
pub async fn run(store: JsonFileStore, skip_welcome: bool) -> Result<()> {
    info!("Starting TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let mut app = App::new(GameMachine::load(store), events_tx, skip_welcome);

    let result = run_loop(&mut terminal, &mut app, &mut events_rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App<JsonFileStore>,
    events_rx: &mut mpsc::UnboundedReceiver<AppEvent>,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Background events first (computer-move timers).
        while let Ok(event) = events_rx.try_recv() {
            app.handle_event(event);
        }

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        app.tick();

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}
