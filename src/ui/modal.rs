// Modal and overlay UI components.
// Informational popups, transient toasts, and the help overlay.

use ratatui::{prelude::*, widgets::*};

use crate::state::{Popup, Toast};

/// Draw a modal informational dialog on top of the current view.
/// Dismissed with a single acknowledgement key; nothing else reacts to
/// input while it is open.
pub fn draw_info_popup(frame: &mut Frame, popup: &Popup) {
    let area = frame.area();

    let modal_width = 62.min(area.width.saturating_sub(4));
    let line_count = popup.message.lines().count() as u16;
    let modal_height = (line_count + 4).clamp(7, area.height.saturating_sub(2));

    let modal_x = (area.width.saturating_sub(modal_width)) / 2;
    let modal_y = (area.height.saturating_sub(modal_height)) / 2;
    let modal_area = Rect::new(modal_x, modal_y, modal_width, modal_height);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(modal_area);

    let body = Paragraph::new(popup.message.as_str())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(popup.title.as_str())
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        );
    frame.render_widget(body, chunks[0]);

    let instructions = Line::from(vec![
        Span::styled(" Enter", Style::default().fg(Color::Yellow)),
        Span::styled(" = OK ", Style::default().fg(Color::DarkGray)),
    ]);
    let instructions_widget = Paragraph::new(instructions).alignment(Alignment::Center);
    frame.render_widget(instructions_widget, chunks[1]);
}

/// Draw a transient toast in the bottom-right corner.
pub fn draw_toast(frame: &mut Frame, toast: &Toast) {
    let area = frame.area();

    let width = (toast.text.chars().count() as u16 + 4).min(area.width);
    let x = area.width.saturating_sub(width);
    let y = area.height.saturating_sub(2);
    let toast_area = Rect::new(x, y, width, 1);

    frame.render_widget(Clear, toast_area);

    let text = Paragraph::new(format!(" {} ", toast.text))
        .alignment(Alignment::Center)
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(text, toast_area);
}

/// Draw the help overlay.
pub fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Create a centered popup
    let popup_width = 48;
    let popup_height = 14;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ↑/↓ or j/k  ", Style::default().fg(Color::Cyan)),
            Span::raw("Navigate list"),
        ]),
        Line::from(vec![
            Span::styled("  Enter       ", Style::default().fg(Color::Cyan)),
            Span::raw("App details"),
        ]),
        Line::from(vec![
            Span::styled("  Tab         ", Style::default().fg(Color::Cyan)),
            Span::raw("Switch tabs"),
        ]),
        Line::from(vec![
            Span::styled("  r           ", Style::default().fg(Color::Cyan)),
            Span::raw("Refresh (cache first)"),
        ]),
        Line::from(vec![
            Span::styled("  R           ", Style::default().fg(Color::Cyan)),
            Span::raw("Force refresh (erase cache)"),
        ]),
        Line::from(vec![
            Span::styled("  ?           ", Style::default().fg(Color::Cyan)),
            Span::raw("Show/hide this help"),
        ]),
        Line::from(vec![
            Span::styled("  q           ", Style::default().fg(Color::Cyan)),
            Span::raw("Quit"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" or ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}
