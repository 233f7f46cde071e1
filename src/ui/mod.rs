//! UI module for rendering the TUI

mod components;
mod contact;
mod field_renderer;
mod layout;
mod palette;

use crate::app::App;
use palette::Palette;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.theme);
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, &palette);
    contact::draw(frame, main_area, app, &palette);
    layout::draw_status_bar(frame, status_area, app);

    // Toast goes last so it sits above everything else
    if let Some(toast) = app.controller.toast() {
        components::render_toast(frame, toast, &palette);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::MockAnalyticsSink;
    use crate::config::ContactConfig;
    use crate::delivery::MockSubmissionClient;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn render(app: &App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app(config: ContactConfig) -> App {
        App::new(
            Arc::new(config),
            Arc::new(MockSubmissionClient::new()),
            Arc::new(MockAnalyticsSink::new()),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_renders_empty_form() {
        let screen = render(&app(ContactConfig::default()));

        assert!(screen.contains("Get In Touch"));
        assert!(screen.contains("Let's Connect"));
        assert!(screen.contains(" Name "));
        assert!(screen.contains(" Email "));
        assert!(screen.contains(" Message "));
        assert!(screen.contains("Enter your email"));
        assert!(screen.contains("Send Message"));
        assert!(screen.contains("Idle"));
    }

    #[test]
    fn test_renders_inline_errors() {
        let mut app = app(ContactConfig::default());
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Enter);

        let screen = render(&app);
        assert!(screen.contains("Name is required"));
        assert!(screen.contains("Email is required"));
        assert!(screen.contains("Message is required"));
        assert!(screen.contains("Failed"));
    }

    #[tokio::test]
    async fn test_renders_configuration_toast() {
        let mut app = app(ContactConfig::default());
        for c in "Ada".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        for c in "ada@example.com".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('x'));
        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));

        let screen = render(&app);
        assert!(screen.contains("Configuration error. Please try again later."));
        // Typed values stay on screen
        assert!(screen.contains("ada@example.com"));
    }
}
