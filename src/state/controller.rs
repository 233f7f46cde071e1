//! Contact form submission state machine
//!
//! `FormController` is the only writer of the form values, the validation
//! errors and the submission status. Field edits and submit triggers are
//! applied synchronously; the delivery call runs as a spawned task whose
//! result comes back through a channel and is applied with
//! [`FormController::apply_outcome`].

use super::forms::{
    sanitize, validate, ContactForm, FieldName, Form, FormField, ValidationErrors,
};
use super::notifications::{NotificationCenter, Toast, ToastExpired, ToastKind};
use super::submission::{FailureKind, SubmissionStatus, CONFIGURATION_ERROR_MESSAGE, SUCCESS_MESSAGE};
use crate::analytics::{AnalyticsEvent, AnalyticsSink};
use crate::config::ContactConfig;
use crate::delivery::{Ack, ContactPayload, SubmissionClient, SubmissionError};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Result of a delivery call, tagged with the dispatch it belongs to
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub generation: u64,
    pub result: Result<Ack, SubmissionError>,
}

/// What a submit trigger did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Payload handed to the delivery client
    Dispatched { generation: u64 },
    /// A submission was already in flight
    Ignored,
    /// Validation failed; errors are shown inline
    Invalid,
    /// Delivery secrets are missing
    MissingConfiguration,
}

/// Receivers the event loop drains and feeds back into the controller
#[derive(Debug)]
pub struct ControllerEvents {
    pub outcomes: mpsc::UnboundedReceiver<SubmissionOutcome>,
    pub toasts: mpsc::UnboundedReceiver<ToastExpired>,
}

#[derive(Debug)]
struct InFlight {
    generation: u64,
    /// Sanitized email, reported to analytics on success
    label: String,
    handle: JoinHandle<()>,
}

pub struct FormController {
    form: ContactForm,
    errors: ValidationErrors,
    status: SubmissionStatus,
    notifications: NotificationCenter,
    client: Arc<dyn SubmissionClient>,
    analytics: Arc<dyn AnalyticsSink>,
    config: Arc<ContactConfig>,
    outcome_tx: mpsc::UnboundedSender<SubmissionOutcome>,
    generation: u64,
    in_flight: Option<InFlight>,
}

impl FormController {
    pub fn new(
        client: Arc<dyn SubmissionClient>,
        analytics: Arc<dyn AnalyticsSink>,
        config: Arc<ContactConfig>,
    ) -> (Self, ControllerEvents) {
        let (outcome_tx, outcomes) = mpsc::unbounded_channel();
        let (notifications, toasts) = NotificationCenter::channel(config.toast_lifetime());

        let controller = Self {
            form: ContactForm::new(),
            errors: ValidationErrors::default(),
            status: SubmissionStatus::Idle,
            notifications,
            client,
            analytics,
            config,
            outcome_tx,
            generation: 0,
            in_flight: None,
        };

        (controller, ControllerEvents { outcomes, toasts })
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status.is_submitting()
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.notifications.current()
    }

    pub fn focus_next(&mut self) {
        self.form.next_field();
    }

    pub fn focus_prev(&mut self) {
        self.form.prev_field();
    }

    /// The input with focus, or `None` on the send button row
    pub fn active_field(&self) -> Option<FieldName> {
        self.form.active_field_name()
    }

    /// Append a character to a field
    pub fn insert_char(&mut self, field: FieldName, c: char) {
        self.edit(field, |f| f.push_char(c));
    }

    /// Delete the last character of a field
    pub fn delete_char(&mut self, field: FieldName) {
        self.edit(field, |f| f.pop_char());
    }

    /// Replace a field's value
    #[cfg(test)]
    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) {
        let value = value.into();
        self.edit(field, |f| f.set_text(value));
    }

    /// Apply an edit and clear that field's error. The status is untouched.
    fn edit(&mut self, field: FieldName, apply: impl FnOnce(&mut FormField)) {
        apply(self.form.field_mut(field));
        if self.errors.clear_field(field) {
            debug!(%field, "cleared validation error on edit");
        }
    }

    /// Handle a submit trigger
    pub fn submit(&mut self) -> SubmitAttempt {
        if self.status.is_submitting() {
            debug!("submit ignored while a submission is in flight");
            return SubmitAttempt::Ignored;
        }

        let values = self.form.values();
        let errors = validate(&values);
        if !errors.is_valid() {
            debug!(count = errors.len(), "contact form failed validation");
            self.errors = errors;
            self.status = SubmissionStatus::Error(FailureKind::Validation);
            return SubmitAttempt::Invalid;
        }
        self.errors.clear();

        let Some(secrets) = self.config.delivery_secrets() else {
            warn!("delivery secrets are not configured; skipping send");
            self.status = SubmissionStatus::Error(FailureKind::Configuration);
            self.notifications
                .show(ToastKind::Error, CONFIGURATION_ERROR_MESSAGE);
            return SubmitAttempt::MissingConfiguration;
        };

        let payload = ContactPayload::from(sanitize(&values));
        self.generation += 1;
        let generation = self.generation;
        let label = payload.email.clone();

        let client = Arc::clone(&self.client);
        let tx = self.outcome_tx.clone();
        let handle = tokio::spawn(async move {
            let result = client.send(&secrets, &payload).await;
            // Receiver gone means the form was torn down
            let _ = tx.send(SubmissionOutcome { generation, result });
        });

        info!(generation, "dispatching contact message");
        self.in_flight = Some(InFlight {
            generation,
            label,
            handle,
        });
        self.status = SubmissionStatus::Submitting;
        SubmitAttempt::Dispatched { generation }
    }

    /// Apply the result of a delivery call.
    ///
    /// Returns false if the outcome does not belong to the in-flight dispatch,
    /// in which case it is discarded.
    pub fn apply_outcome(&mut self, outcome: SubmissionOutcome) -> bool {
        let is_current = self.status.is_submitting()
            && self
                .in_flight
                .as_ref()
                .is_some_and(|f| f.generation == outcome.generation);
        if !is_current {
            debug!(generation = outcome.generation, "discarding stale submission outcome");
            return false;
        }
        let Some(in_flight) = self.in_flight.take() else {
            return false;
        };

        match outcome.result {
            Ok(ack) => {
                info!(generation = outcome.generation, status = ack.status, "contact message delivered");
                self.form.reset();
                self.errors.clear();
                self.status = SubmissionStatus::Success;
                self.notifications.show(ToastKind::Success, SUCCESS_MESSAGE);
                self.analytics
                    .record(AnalyticsEvent::contact_submitted(in_flight.label));
            }
            Err(err) => {
                let kind = FailureKind::classify(&err.diagnostic);
                warn!(
                    generation = outcome.generation,
                    diagnostic = %err.diagnostic,
                    ?kind,
                    "contact message delivery failed"
                );
                self.status = SubmissionStatus::Error(kind);
                if let Some(message) = kind.toast_message() {
                    self.notifications.show(ToastKind::Error, message);
                }
            }
        }
        true
    }

    /// Forward a toast timer firing to the notification center
    pub fn expire_toast(&mut self, event: ToastExpired) -> bool {
        self.notifications.expire(event)
    }

    /// Abort any in-flight delivery, drop late results and clear the toast
    pub fn teardown(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            debug!(generation = in_flight.generation, "aborting in-flight submission");
            in_flight.handle.abort();
        }
        self.generation += 1;
        if self.status.is_submitting() {
            self.status = SubmissionStatus::Idle;
        }
        self.notifications.teardown();
    }
}

impl Drop for FormController {
    fn drop(&mut self) {
        self.teardown();
    }
}
