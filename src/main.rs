// Terminal entry point.
// Wires the fetcher to the local store and runs the event loop.

use std::io;
use std::sync::Arc;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

mod app;
mod cache;
mod catalog;
mod error;
mod state;
mod ui;

use app::App;
use cache::FileStore;
use catalog::{CatalogClient, CatalogFetcher};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let store = Arc::new(FileStore::open_default()?);
    let client = CatalogClient::default_source()?;
    let fetcher = Arc::new(CatalogFetcher::new(client, store));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(fetcher);
    app.request_catalog(false);
    let run_result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result?;
    Ok(())
}
