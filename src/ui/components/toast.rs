//! Toast overlay anchored to the bottom-right corner

use crate::state::{Toast, ToastKind};
use crate::ui::palette::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const MAX_WIDTH: u16 = 60;
/// Gap from the right edge and from the status bar
const MARGIN: u16 = 2;

/// Compute where the toast goes inside `area`, above the status bar row
pub fn toast_area(area: Rect, message: &str) -> Rect {
    let padding = 4u16; // icon + spaces
    let max_line_width = (MAX_WIDTH - padding - 2) as usize;
    let lines = wrap_text(message, max_line_width);

    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0) as u16;
    let width = (content_width + padding + 2)
        .min(MAX_WIDTH)
        .min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);

    Rect {
        x: area.x + area.width.saturating_sub(width + MARGIN),
        y: area.y + area.height.saturating_sub(height + 1 + MARGIN / 2),
        width,
        height,
    }
}

/// Render the live toast over whatever is beneath it
pub fn render_toast(frame: &mut Frame, toast: &Toast, palette: &Palette) {
    let area = toast_area(frame.area(), &toast.message);

    let (icon, style) = match toast.kind {
        ToastKind::Success => (
            "✓",
            Style::default().bg(palette.success_bg).fg(palette.success_fg),
        ),
        ToastKind::Error => (
            "✗",
            Style::default().bg(palette.error_bg).fg(palette.error_fg),
        ),
    };

    let max_line_width = (area.width.saturating_sub(6)) as usize;
    let content: Vec<Line> = wrap_text(&toast.message, max_line_width.max(1))
        .into_iter()
        .enumerate()
        .map(|(idx, line)| {
            let lead = if idx == 0 { icon } else { " " };
            Line::from(vec![
                Span::styled(format!(" {lead} "), style.add_modifier(Modifier::BOLD)),
                Span::styled(line, style),
            ])
        })
        .collect();

    frame.render_widget(Clear, area);
    let paragraph = Paragraph::new(content).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(style),
    );
    frame.render_widget(paragraph, area);
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.chars().count() + word.chars().count() + 1 > max_width
            && !current_line.is_empty()
        {
            lines.push(std::mem::take(&mut current_line));
        }
        if !current_line.is_empty() {
            current_line.push(' ');
        }
        current_line.push_str(word);
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
