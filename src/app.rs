// App state and main event loop.
// Manages tabs, keyboard input, notifications, and the background
// catalog fetch task.

use std::io;
use std::sync::Arc;
use std::sync::mpsc;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::ListState;

use crate::catalog::{CatalogFetcher, CatalogItem, FetchOutcome};
use crate::state::{
    ConsoleLevel, ConsoleMessage, LONG_MESSAGE, LoadingState, Notifier, SHORT_MESSAGE,
    SelectableList,
};
use crate::ui;

/// Active tab in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Catalog,
    Console,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Catalog => "Catalog",
            Tab::Console => "Console",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::Catalog => Tab::Console,
            Tab::Console => Tab::Catalog,
        }
    }

    pub fn prev(&self) -> Self {
        self.next()
    }
}

/// Outcome of a background fetch, delivered to the event loop.
pub struct FetchMessage {
    pub forced: bool,
    pub result: crate::error::Result<FetchOutcome>,
}

/// Main application state.
pub struct App {
    /// Currently active tab.
    pub active_tab: Tab,
    /// Catalog list with loading state.
    pub catalog: SelectableList<CatalogItem>,
    /// Console messages (activity log).
    pub console_messages: Vec<ConsoleMessage>,
    /// List state for console scrolling.
    pub console_list_state: ListState,
    /// Number of unread console warnings/errors (for badge).
    pub console_unread: usize,
    /// Toast and popup surface.
    pub notifier: Notifier,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,

    fetcher: Arc<CatalogFetcher>,
    fetch_tx: mpsc::Sender<FetchMessage>,
    fetch_rx: mpsc::Receiver<FetchMessage>,
}

impl App {
    pub fn new(fetcher: Arc<CatalogFetcher>) -> Self {
        let (fetch_tx, fetch_rx) = mpsc::channel();
        Self {
            active_tab: Tab::default(),
            catalog: SelectableList::new(),
            console_messages: Vec::new(),
            console_list_state: ListState::default(),
            console_unread: 0,
            notifier: Notifier::new(),
            show_help: false,
            should_quit: false,
            fetcher,
            fetch_tx,
            fetch_rx,
        }
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            self.drain_fetch_messages();
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Start a catalog retrieval on the runtime. The fetch never runs
    /// on the event-loop thread; its outcome arrives via the channel.
    pub fn request_catalog(&mut self, force_refresh: bool) {
        if self.catalog.data.is_loading() {
            return;
        }
        self.catalog.data = LoadingState::Loading;
        if force_refresh {
            self.log_info("Forced refresh: erasing cached catalog");
        }

        let fetcher = Arc::clone(&self.fetcher);
        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            let result = fetcher.try_get_catalog(force_refresh).await;
            let _ = tx.send(FetchMessage {
                forced: force_refresh,
                result,
            });
        });
    }

    /// Apply any fetch outcomes that arrived since the last frame.
    fn drain_fetch_messages(&mut self) {
        while let Ok(message) = self.fetch_rx.try_recv() {
            self.apply_fetch_message(message);
        }
    }

    fn apply_fetch_message(&mut self, message: FetchMessage) {
        match message.result {
            Ok(outcome) => {
                let count = outcome.items.len();
                let origin = if outcome.from_cache { "cache" } else { "network" };
                self.log_info(format!("Loaded {count} apps from {origin}"));
                if let Some(err) = outcome.persist_error {
                    self.log_warn(format!("Could not cache catalog: {err}"));
                }
                self.catalog.set_items(outcome.items);
                if message.forced {
                    self.notifier
                        .show_message(format!("Catalog refreshed ({count} apps)"), SHORT_MESSAGE);
                }
            }
            Err(err) => {
                let kind = if err.is_network() { "Network" } else { "Parse" };
                self.log_error(format!("{kind} failure: {err}"));
                self.catalog.data = LoadingState::Error(err.to_string());
                self.notifier
                    .show_message("Catalog refresh failed", LONG_MESSAGE);
            }
        }
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) {
        // Modal surfaces capture input first.
        if self.show_help {
            if matches!(code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }
        if self.notifier.has_popup() {
            if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')) {
                self.notifier.dismiss_popup();
            }
            return;
        }

        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab => {
                self.active_tab = self.active_tab.next();
                self.clear_console_badge_if_viewing();
            }
            KeyCode::BackTab => {
                self.active_tab = self.active_tab.prev();
                self.clear_console_badge_if_viewing();
            }
            KeyCode::Char('r') => self.request_catalog(false),
            KeyCode::Char('R') => self.request_catalog(true),
            KeyCode::Up | KeyCode::Char('k') => match self.active_tab {
                Tab::Catalog => self.catalog.select_prev(),
                Tab::Console => self.console_select_prev(),
            },
            KeyCode::Down | KeyCode::Char('j') => match self.active_tab {
                Tab::Catalog => self.catalog.select_next(),
                Tab::Console => self.console_select_next(),
            },
            KeyCode::Enter => {
                if self.active_tab == Tab::Catalog {
                    self.show_selected_details();
                }
            }
            _ => {}
        }
    }

    /// Open the details popup for the selected catalog item.
    fn show_selected_details(&mut self) {
        let Some(item) = self.catalog.selected_item() else {
            return;
        };
        let installed = item.current_version.as_deref().unwrap_or("not installed");
        let title = format!(" {} ", item.title);
        let message = format!(
            "Package:   {}\nInstalled: {}\nLatest:    {}\nStatus:    {}\nDownload:  {}\n\n{}",
            item.package_name,
            installed,
            item.latest_version,
            item.status.label(),
            item.download_url,
            item.short_description,
        );
        self.notifier.show_popup(title, message);
    }

    /// Add an info message.
    pub fn log_info(&mut self, message: impl Into<String>) {
        self.push_console(ConsoleMessage::info(message));
    }

    /// Add a warning message.
    pub fn log_warn(&mut self, message: impl Into<String>) {
        self.push_console(ConsoleMessage::warn(message));
    }

    /// Add an error message.
    pub fn log_error(&mut self, message: impl Into<String>) {
        self.push_console(ConsoleMessage::error(message));
    }

    fn push_console(&mut self, message: ConsoleMessage) {
        if message.level != ConsoleLevel::Info && self.active_tab != Tab::Console {
            self.console_unread += 1;
        }
        self.console_messages.push(message);
        self.console_list_state.select(Some(0));
    }

    /// Select the previous (newer) console message.
    fn console_select_prev(&mut self) {
        if self.console_messages.is_empty() {
            return;
        }
        let i = match self.console_list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.console_list_state.select(Some(i));
    }

    /// Select the next (older) console message.
    fn console_select_next(&mut self) {
        if self.console_messages.is_empty() {
            return;
        }
        let last = self.console_messages.len() - 1;
        let i = match self.console_list_state.selected() {
            Some(i) => (i + 1).min(last),
            None => 0,
        };
        self.console_list_state.select(Some(i));
    }

    /// Clear console badge when viewing console tab.
    fn clear_console_badge_if_viewing(&mut self) {
        if self.active_tab == Tab::Console {
            self.console_unread = 0;
        }
    }
}
