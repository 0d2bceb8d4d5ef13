// UI module for rendering the TUI.
// Contains widgets for tabs, lists, the console, and overlays.

mod list;
mod modal;
mod tabs;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Tab};
use crate::state::ConsoleLevel;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    // Tab bar
    tabs::draw_tabs(frame, app, chunks[0]);

    // Main content area
    draw_content(frame, app, chunks[1]);

    // Status bar
    draw_status_bar(frame, chunks[2]);

    // Overlays (rendered last, on top of everything)
    if let Some(toast) = app.notifier.active_toast() {
        let toast = toast.clone();
        modal::draw_toast(frame, &toast);
    }
    if let Some(popup) = app.notifier.active_popup() {
        let popup = popup.clone();
        modal::draw_info_popup(frame, &popup);
    }
    if app.show_help {
        modal::draw_help_overlay(frame);
    }
}

/// Draw the main content area based on active tab.
fn draw_content(frame: &mut Frame, app: &mut App, area: Rect) {
    match app.active_tab {
        Tab::Catalog => list::render_catalog_list(frame, &mut app.catalog, area),
        Tab::Console => draw_console_tab(frame, app, area),
    }
}

/// Draw the Console tab with activity messages.
fn draw_console_tab(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Console ");

    if app.console_messages.is_empty() {
        let text = Paragraph::new("No messages")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, area);
    } else {
        // Show newest messages first (reverse order)
        let items: Vec<ListItem> = app
            .console_messages
            .iter()
            .rev()
            .map(|msg| {
                let (icon, color) = match msg.level {
                    ConsoleLevel::Error => ("❌", Color::Red),
                    ConsoleLevel::Warn => ("⚠️", Color::Yellow),
                    ConsoleLevel::Info => ("ℹ️", Color::Cyan),
                };

                let time = list::format_relative_time(&msg.timestamp);

                ListItem::new(Line::from(vec![
                    Span::raw(format!("{} ", icon)),
                    Span::styled(time, Style::default().fg(Color::DarkGray)),
                    Span::raw(" "),
                    Span::styled(msg.message.clone(), Style::default().fg(color)),
                ]))
            })
            .collect();

        let list_widget = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        frame.render_stateful_widget(list_widget, area, &mut app.console_list_state);
    }
}

/// Draw the status bar with keybinding hints.
fn draw_status_bar(frame: &mut Frame, area: Rect) {
    let hints = vec![
        Span::raw(" ↑↓ "),
        Span::styled("Navigate", Style::default().fg(Color::DarkGray)),
        Span::raw("  ↵ "),
        Span::styled("Details", Style::default().fg(Color::DarkGray)),
        Span::raw("  Tab "),
        Span::styled("Switch", Style::default().fg(Color::DarkGray)),
        Span::raw("  r "),
        Span::styled("Refresh", Style::default().fg(Color::DarkGray)),
        Span::raw("  R "),
        Span::styled("Force", Style::default().fg(Color::DarkGray)),
        Span::raw("  ? "),
        Span::styled("Help", Style::default().fg(Color::DarkGray)),
        Span::raw("  q "),
        Span::styled("Quit", Style::default().fg(Color::DarkGray)),
    ];

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}
