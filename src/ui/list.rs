// Catalog list rendering.
// Provides styled list views with loading, error, and empty states.

use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::*};

use crate::catalog::{CatalogItem, InstallStatus};
use crate::state::{LoadingState, SelectableList};

/// Format a timestamp as relative time (e.g., "2h ago").
pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(*dt);

    if duration.num_days() > 0 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

/// Get icon for install status.
fn status_icon(status: InstallStatus) -> &'static str {
    match status {
        InstallStatus::UpToDate => "✅",
        InstallStatus::UpdateAvailable => "⬆️",
        InstallStatus::PendingDownload => "⏳",
        InstallStatus::Downloading => "🔄",
        InstallStatus::Installing | InstallStatus::Uninstalling => "🔧",
        InstallStatus::NotInstalled => "⚪",
        InstallStatus::Unknown => "❓",
    }
}

/// Get color for install status.
fn status_color(status: InstallStatus) -> Color {
    match status {
        InstallStatus::UpToDate => Color::Green,
        InstallStatus::UpdateAvailable => Color::Yellow,
        InstallStatus::PendingDownload | InstallStatus::Downloading => Color::Blue,
        InstallStatus::Installing | InstallStatus::Uninstalling => Color::Magenta,
        InstallStatus::NotInstalled => Color::Gray,
        InstallStatus::Unknown => Color::DarkGray,
    }
}

/// Render a loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(format!("⏳ {}...", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(text, area);
}

/// Render an error message.
pub fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let text = Paragraph::new(format!("❌ {}", error))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red));
    frame.render_widget(text, area);
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

/// Render the catalog list.
pub fn render_catalog_list(
    frame: &mut Frame,
    list: &mut SelectableList<CatalogItem>,
    area: Rect,
) {
    match &list.data {
        LoadingState::Idle => render_empty(frame, area, "Press r to load the catalog"),
        LoadingState::Loading => render_loading(frame, area, "Loading catalog"),
        LoadingState::Error(e) => render_error(frame, area, e),
        LoadingState::Loaded(items) => {
            if items.is_empty() {
                render_empty(frame, area, "No apps available — press R to force a refresh");
            } else {
                let rows: Vec<ListItem> = items.iter().map(catalog_row).collect();

                let list_widget = List::new(rows)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title(format!(" Apps ({}) ", items.len())),
                    )
                    .highlight_style(
                        Style::default()
                            .bg(Color::DarkGray)
                            .add_modifier(Modifier::BOLD),
                    )
                    .highlight_symbol("> ");

                frame.render_stateful_widget(list_widget, area, &mut list.list_state);
            }
        }
    }
}

fn catalog_row(item: &CatalogItem) -> ListItem<'_> {
    let versions = match &item.current_version {
        Some(current) => format!("  {} → {}", current, item.latest_version),
        None => format!("  {}", item.latest_version),
    };

    let mut spans = vec![
        Span::raw(format!("{} ", status_icon(item.status))),
        Span::styled(&item.title, Style::default().fg(Color::Cyan)),
        Span::styled(versions, Style::default().fg(status_color(item.status))),
    ];

    if item.status == InstallStatus::Downloading {
        spans.push(Span::styled(
            format!("  {:.0}%", item.download_progress * 100.0),
            Style::default().fg(Color::Blue),
        ));
    }

    if !item.short_description.is_empty() {
        spans.push(Span::styled(
            format!("  {}", item.short_description),
            Style::default().fg(Color::DarkGray),
        ));
    }

    ListItem::new(Line::from(spans))
}
