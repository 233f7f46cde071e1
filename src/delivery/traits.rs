//! Trait abstraction for the message-delivery service to enable mocking in tests

use crate::config::DeliverySecrets;
use crate::state::FormFields;
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// The sanitized message handed to the delivery service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<FormFields> for ContactPayload {
    fn from(fields: FormFields) -> Self {
        Self {
            name: fields.name,
            email: fields.email,
            message: fields.message,
        }
    }
}

/// Acknowledgment returned by the delivery service on success
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ack {
    pub status: u16,
    pub text: String,
}

/// Failure reported by the delivery service.
///
/// The diagnostic text is not under our control; callers classify it by
/// substring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("delivery failed: {diagnostic}")]
pub struct SubmissionError {
    pub diagnostic: String,
}

impl SubmissionError {
    pub fn new(diagnostic: impl Into<String>) -> Self {
        Self {
            diagnostic: diagnostic.into(),
        }
    }
}

/// Sends one contact message. Single attempt, no retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionClient: Send + Sync {
    async fn send(
        &self,
        secrets: &DeliverySecrets,
        payload: &ContactPayload,
    ) -> Result<Ack, SubmissionError>;
}
