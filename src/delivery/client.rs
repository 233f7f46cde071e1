//! EmailJS REST client
//!
//! Posts a template-send request to the EmailJS API. The public key travels in
//! the body as `user_id`; the template parameters are the sanitized contact
//! fields.

use super::traits::{Ack, ContactPayload, SubmissionClient, SubmissionError};
use crate::config::DeliverySecrets;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;

/// Default EmailJS API origin
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com";

const SEND_PATH: &str = "/api/v1.0/email/send";

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactPayload,
}

/// Client for the EmailJS delivery service
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    http: Client,
    endpoint: String,
}

impl EmailJsClient {
    /// Create a new client against `endpoint` with a per-request timeout
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// Full URL of the send endpoint
    pub fn send_url(&self) -> String {
        format!("{}{}", self.endpoint.trim_end_matches('/'), SEND_PATH)
    }
}

#[async_trait]
impl SubmissionClient for EmailJsClient {
    async fn send(
        &self,
        secrets: &DeliverySecrets,
        payload: &ContactPayload,
    ) -> Result<Ack, SubmissionError> {
        let body = SendRequest {
            service_id: &secrets.service_id,
            template_id: &secrets.template_id,
            user_id: &secrets.public_key,
            template_params: payload,
        };

        let response = self
            .http
            .post(self.send_url())
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;

        if status.is_success() {
            Ok(Ack {
                status: status.as_u16(),
                text,
            })
        } else {
            Err(SubmissionError::new(rejection_diagnostic(status, &text)))
        }
    }
}

/// Map a transport failure to a diagnostic the classifier understands
fn transport_error(err: reqwest::Error) -> SubmissionError {
    if err.is_timeout() {
        SubmissionError::new(format!("timeout: {err}"))
    } else {
        SubmissionError::new(format!("network error: {err}"))
    }
}

/// Diagnostic for a non-success response: the body text, or the status line
fn rejection_diagnostic(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        status.to_string()
    } else {
        body.to_string()
    }
}
