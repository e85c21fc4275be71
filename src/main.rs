//! daybook - recent commits across repositories, grouped by day
//!
//! Binary entry point for the TUI application.

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing_subscriber::EnvFilter;

use daybook::app::App;
use daybook::cli::Cli;
use daybook::config::Config;
use daybook::model::ColorRegistry;
use daybook::timeline::TimelineController;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging()?;

    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply(&mut config);
    let registry = ColorRegistry::new(config.palette()?);
    let timeline = TimelineController::new(config.feed_source(), registry);

    let terminal = ratatui::init();
    let result = run(terminal, timeline);
    ratatui::restore();
    result
}

/// Logs go to the file named by `DAYBOOK_LOG`; the terminal belongs to the TUI.
fn init_logging() -> color_eyre::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("daybook=info"));

    match std::env::var_os("DAYBOOK_LOG") {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::sink)
                .try_init();
        }
    }
    Ok(())
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, timeline: TimelineController) -> color_eyre::Result<()> {
    let mut app = App::new(timeline);

    while app.running {
        app.on_tick();
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Handle crossterm events.
///
/// Polls with a 200ms timeout so finished background loads are picked up while idle.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))?
        && let Event::Key(key) = event::read()?
        && key.kind == KeyEventKind::Press
    {
        app.on_key_event(key);
    }
    Ok(())
}
