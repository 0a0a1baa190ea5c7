// fit-tracker-tui/src/main.rs
use anyhow::{anyhow, Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fit_tracker_lib::WorkoutService;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::path::Path;
use std::{io, time::Duration};
use tracing_subscriber::EnvFilter;

mod app; // Application state
mod ui; // UI rendering logic

use crate::app::App;

const LOG_ENV_VAR: &str = "FIT_TRACKER_LOG";
const LOG_FILE_NAME: &str = "fit-tracker-tui.log";

fn main() -> Result<()> {
    // The diagnostic log is the only place remote failures show up, so it is
    // wired before anything can fail. The guard must outlive the app.
    let _log_guard = init_logging().context("Failed to initialize logging")?;

    // Initialize the library service (loads the config with the server URL)
    let service =
        WorkoutService::initialize().context("Failed to initialize the workout service")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run it
    let mut app = App::new(service);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err); // Print errors to stderr
    }

    Ok(())
}

// Logs go to a file next to the config; the terminal belongs to the UI.
fn init_logging() -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = fit_tracker_lib::get_config_path_util()?
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow!("Config path has no parent directory"))?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render_ui(f, app))?;

        // The collection is only re-fetched after a successful mutation, so
        // the loop just waits for input.
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events
                if key.kind == KeyEventKind::Press {
                    app.handle_key_event(key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
