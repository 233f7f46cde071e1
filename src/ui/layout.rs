//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{SEND_SHORTCUT, THEME_SHORTCUT};
use crate::state::SubmissionStatus;
use crate::ui::palette::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the section header
pub fn draw_header(frame: &mut Frame, area: Rect, palette: &Palette) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Get In Touch",
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (dot, dot_color) = match app.controller.status() {
        SubmissionStatus::Idle => ("○", Color::Gray),
        SubmissionStatus::Submitting => ("◐", Color::Yellow),
        SubmissionStatus::Success => ("●", Color::Green),
        SubmissionStatus::Error(_) => ("●", Color::Red),
    };

    let spans = vec![
        Span::styled(format!(" {dot} "), Style::default().fg(dot_color)),
        Span::styled(
            app.controller.status().label(),
            Style::default().fg(Color::White),
        ),
        Span::raw(" | "),
        Span::styled(hints(), Style::default().fg(Color::Gray)),
    ];

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Keyboard hints for the contact form
fn hints() -> String {
    format!("Tab:next  {SEND_SHORTCUT}:send  {THEME_SHORTCUT}:theme  Esc:quit")
}
