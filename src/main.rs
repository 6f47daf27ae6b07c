//! listmerge
//!
//! Binary entry point for the TUI application.

use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use listmerge::api::{FetchWorker, ListClient};
use listmerge::app::App;
use listmerge::config::{Cli, Settings};
use listmerge::logging;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let settings = Settings::resolve(&cli)?;
    logging::init_logging(&settings.log_path(), &settings.log_level)?;

    let client = ListClient::new(settings.api_url()?, settings.timeout())?;
    let worker = FetchWorker::spawn(client)?;

    let terminal = ratatui::init();
    let result = run(terminal, App::new(worker));
    ratatui::restore();
    result
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, mut app: App) -> color_eyre::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    tracing::info!("listmerge exiting");
    Ok(())
}

/// Handle crossterm events.
///
/// Uses poll with 200ms timeout so fetch results and notification expiry
/// are picked up while no key is pressed.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    }
    app.poll_loader();
    app.clear_expired_notification();
    Ok(())
}
