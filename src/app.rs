//! Application state and key handling

use crate::analytics::AnalyticsSink;
use crate::config::{ContactConfig, Theme};
use crate::delivery::SubmissionClient;
use crate::platform::ACTION_MODIFIERS;
use crate::state::{ControllerEvents, FieldName, FormController, SubmitAttempt};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;

/// Main application struct
pub struct App {
    /// Contact form state machine
    pub controller: FormController,
    /// Background results waiting to be applied
    events: ControllerEvents,
    /// Current color scheme, read by the renderer
    pub theme: Theme,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(
        config: Arc<ContactConfig>,
        client: Arc<dyn SubmissionClient>,
        analytics: Arc<dyn AnalyticsSink>,
    ) -> Self {
        let theme = config.theme();
        let (controller, events) = FormController::new(client, analytics, config);

        Self {
            controller,
            events,
            theme,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let is_action = key.modifiers.intersects(ACTION_MODIFIERS);

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
            }
            KeyCode::Char('s') if is_action => self.submit(),
            KeyCode::Char('t') if is_action => {
                self.theme = self.theme.toggle();
                tracing::debug!(theme = ?self.theme, "theme toggled");
            }
            KeyCode::Tab | KeyCode::Down => self.controller.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.controller.focus_prev(),
            KeyCode::Enter => match self.controller.active_field() {
                None => self.submit(),
                Some(FieldName::Message) => self.controller.insert_char(FieldName::Message, '\n'),
                Some(_) => self.controller.focus_next(),
            },
            KeyCode::Backspace => {
                if let Some(field) = self.controller.active_field() {
                    self.controller.delete_char(field);
                }
            }
            KeyCode::Char(c) if !is_action => {
                if let Some(field) = self.controller.active_field() {
                    self.controller.insert_char(field, c);
                }
            }
            _ => {}
        }
    }

    fn submit(&mut self) {
        match self.controller.submit() {
            SubmitAttempt::Dispatched { generation } => {
                tracing::debug!(generation, "submit dispatched");
            }
            attempt => tracing::debug!(?attempt, "submit did not dispatch"),
        }
    }

    /// Apply any submission outcome or toast expiry that is already waiting.
    /// Returns true if anything was applied.
    pub fn drain_events(&mut self) -> bool {
        let mut changed = false;
        while let Ok(outcome) = self.events.outcomes.try_recv() {
            changed |= self.controller.apply_outcome(outcome);
        }
        while let Ok(expired) = self.events.toasts.try_recv() {
            changed |= self.controller.expire_toast(expired);
        }
        changed
    }

    /// Wait up to `tick` for a background event and apply it.
    ///
    /// This is where the event loop yields to the runtime, letting the
    /// delivery call and toast timers make progress.
    pub async fn wait_for_background(&mut self, tick: Duration) {
        tokio::select! {
            Some(outcome) = self.events.outcomes.recv() => {
                self.controller.apply_outcome(outcome);
            }
            Some(expired) = self.events.toasts.recv() => {
                self.controller.expire_toast(expired);
            }
            _ = tokio::time::sleep(tick) => {}
        }
    }

    /// Release the in-flight submission and toast timer
    pub fn shutdown(&mut self) {
        self.controller.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::MockAnalyticsSink;
    use crate::delivery::{Ack, MockSubmissionClient};
    use crate::state::{FailureKind, SubmissionStatus, ToastKind, SEND_BUTTON_INDEX};
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn configured() -> Arc<ContactConfig> {
        Arc::new(ContactConfig {
            service_id: Some("service_abc".to_string()),
            template_id: Some("template_xyz".to_string()),
            public_key: Some("pk_123".to_string()),
            ..Default::default()
        })
    }

    fn app_with(client: MockSubmissionClient, analytics: MockAnalyticsSink) -> App {
        App::new(configured(), Arc::new(client), Arc::new(analytics))
    }

    #[test]
    fn test_typing_fills_active_field_and_tab_moves() {
        let mut app = app_with(MockSubmissionClient::new(), MockAnalyticsSink::new());
        type_str(&mut app, "Ada");
        app.handle_key(key(KeyCode::Tab));
        type_str(&mut app, "ada@example.com");
        app.handle_key(key(KeyCode::Enter));
        type_str(&mut app, "line one");
        app.handle_key(key(KeyCode::Enter));
        type_str(&mut app, "line two");

        let form = app.controller.form();
        assert_eq!(form.name.as_text(), "Ada");
        assert_eq!(form.email.as_text(), "ada@example.com");
        assert_eq!(form.message.as_text(), "line one\nline two");
    }

    #[test]
    fn test_backspace_and_backtab() {
        let mut app = app_with(MockSubmissionClient::new(), MockAnalyticsSink::new());
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.controller.form().active_field_index, SEND_BUTTON_INDEX);
        // Typing on the button row edits nothing
        type_str(&mut app, "zz");
        app.handle_key(key(KeyCode::Up));
        type_str(&mut app, "hey");
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.controller.form().message.as_text(), "he");
    }

    #[test]
    fn test_theme_toggle_and_quit() {
        let mut app = app_with(MockSubmissionClient::new(), MockAnalyticsSink::new());
        assert_eq!(app.theme, Theme::Light);
        app.handle_key(ctrl('t'));
        assert_eq!(app.theme, Theme::Dark);
        // Shortcut letters are not typed into the field
        assert_eq!(app.controller.form().name.as_text(), "");

        assert!(!app.should_quit());
        app.handle_key(ctrl('c'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_esc_quits() {
        let mut app = app_with(MockSubmissionClient::new(), MockAnalyticsSink::new());
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn test_enter_on_button_with_empty_form_shows_errors() {
        let mut client = MockSubmissionClient::new();
        client.expect_send().never();
        let mut app = app_with(client, MockAnalyticsSink::new());

        app.handle_key(key(KeyCode::BackTab));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(
            app.controller.status(),
            SubmissionStatus::Error(FailureKind::Validation)
        );
        assert_eq!(app.controller.errors().len(), 3);
    }

    #[tokio::test]
    async fn test_ctrl_s_sends_and_background_result_applies() {
        let mut client = MockSubmissionClient::new();
        client
            .expect_send()
            .times(1)
            .returning(|_, _| Ok(Ack::default()));
        let mut analytics = MockAnalyticsSink::new();
        analytics.expect_record().times(1).return_const(());
        let mut app = app_with(client, analytics);

        type_str(&mut app, "Ada");
        app.handle_key(key(KeyCode::Tab));
        type_str(&mut app, "ada@example.com");
        app.handle_key(key(KeyCode::Tab));
        type_str(&mut app, "Hello");
        app.handle_key(ctrl('s'));
        assert!(app.controller.is_submitting());

        app.wait_for_background(Duration::from_secs(5)).await;

        assert_eq!(app.controller.status(), SubmissionStatus::Success);
        assert_eq!(app.controller.toast().unwrap().kind, ToastKind::Success);
        assert!(!app.drain_events());
    }

    #[tokio::test]
    async fn test_shutdown_clears_toast() {
        let config = Arc::new(ContactConfig::default());
        let mut app = App::new(
            config,
            Arc::new(MockSubmissionClient::new()),
            Arc::new(MockAnalyticsSink::new()),
        );
        type_str(&mut app, "Ada");
        app.handle_key(key(KeyCode::Tab));
        type_str(&mut app, "ada@example.com");
        app.handle_key(key(KeyCode::Tab));
        type_str(&mut app, "Hello");
        app.handle_key(ctrl('s'));
        assert!(app.controller.toast().is_some());

        app.shutdown();
        assert!(app.controller.toast().is_none());
    }
}
