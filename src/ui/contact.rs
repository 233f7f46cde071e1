//! Contact section: intro panel and the message form

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::{draw_field, ERROR_LINE_HEIGHT};
use super::palette::Palette;
use crate::app::App;
use crate::state::Form;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

const SINGLE_LINE_HEIGHT: u16 = 3;
const MESSAGE_MIN_HEIGHT: u16 = 5;

/// Draw the contact section into `area`
pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    draw_intro(frame, columns[0], palette);
    draw_form(frame, columns[1], app, palette);
}

fn draw_intro(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled(
            "Let's Connect",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Have a project in mind or just want to chat? Feel free to reach out!",
            Style::default().fg(palette.text),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.muted))
        .padding(Padding::horizontal(1));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let controller = &app.controller;
    let form = controller.form();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SINGLE_LINE_HEIGHT),
            Constraint::Length(ERROR_LINE_HEIGHT),
            Constraint::Length(SINGLE_LINE_HEIGHT),
            Constraint::Length(ERROR_LINE_HEIGHT),
            Constraint::Min(MESSAGE_MIN_HEIGHT),
            Constraint::Length(ERROR_LINE_HEIGHT),
            Constraint::Length(BUTTON_HEIGHT),
        ])
        .split(area);

    let active = controller.active_field();
    for (idx, field) in (0..).map_while(|idx| form.get_field(idx)).enumerate() {
        draw_field(
            frame,
            chunks[idx * 2],
            field,
            active == Some(field.name),
            controller.errors().get(field.name),
            palette,
        );
    }

    let is_submitting = controller.is_submitting();
    let label = if is_submitting {
        "Sending..."
    } else {
        "Send Message →"
    };
    render_button(
        frame,
        chunks[6],
        label,
        form.is_button_row_active(),
        !is_submitting,
        palette,
    );
}
