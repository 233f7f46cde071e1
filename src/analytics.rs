//! Analytics event sink
//!
//! The contact form reports one event per successful submission. When GA4
//! credentials are configured the event is forwarded through the Measurement
//! Protocol; otherwise it is only recorded in the log.

use crate::config::AnalyticsConfig;
use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;

const COLLECT_URL: &str = "https://www.google-analytics.com/mp/collect";

/// A single analytics event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub category: String,
    pub action: String,
    pub label: String,
}

impl AnalyticsEvent {
    /// Event emitted after a contact message is delivered
    pub fn contact_submitted(label: impl Into<String>) -> Self {
        Self {
            category: "Contact Form".to_string(),
            action: "Submit".to_string(),
            label: label.into(),
        }
    }
}

/// Fire-and-forget receiver of analytics events
#[cfg_attr(test, mockall::automock)]
pub trait AnalyticsSink: Send + Sync {
    fn record(&self, event: AnalyticsEvent);
}

/// Sink that only records events in the log
#[derive(Debug, Default, Clone)]
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
    fn record(&self, event: AnalyticsEvent) {
        tracing::debug!(
            category = %event.category,
            action = %event.action,
            "analytics event (not forwarded)"
        );
    }
}

#[derive(Debug, Serialize)]
struct CollectRequest<'a> {
    client_id: &'a str,
    events: [CollectEvent<'a>; 1],
}

#[derive(Debug, Serialize)]
struct CollectEvent<'a> {
    name: &'a str,
    params: CollectParams<'a>,
}

#[derive(Debug, Serialize)]
struct CollectParams<'a> {
    event_category: &'a str,
    event_action: &'a str,
    event_label: &'a str,
}

/// Sink that forwards events to GA4 via the Measurement Protocol
#[derive(Debug, Clone)]
pub struct MeasurementProtocolSink {
    http: Client,
    config: AnalyticsConfig,
    client_id: String,
    collect_url: String,
}

impl MeasurementProtocolSink {
    pub fn new(config: AnalyticsConfig) -> Result<Self> {
        Self::with_collect_url(config, COLLECT_URL)
    }

    pub fn with_collect_url(config: AnalyticsConfig, collect_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build analytics HTTP client")?;

        Ok(Self {
            http,
            config,
            client_id: Uuid::new_v4().to_string(),
            collect_url: collect_url.into(),
        })
    }

    fn body(&self, event: &AnalyticsEvent) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(CollectRequest {
            client_id: &self.client_id,
            events: [CollectEvent {
                name: &event.action,
                params: CollectParams {
                    event_category: &event.category,
                    event_action: &event.action,
                    event_label: &event.label,
                },
            }],
        })
    }
}

impl AnalyticsSink for MeasurementProtocolSink {
    fn record(&self, event: AnalyticsEvent) {
        let body = match self.body(&event) {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Failed to encode analytics event: {e}");
                return;
            }
        };

        let request = self.http.post(&self.collect_url).query(&[
            ("measurement_id", self.config.measurement_id.as_str()),
            ("api_secret", self.config.api_secret.as_str()),
        ]);

        tokio::spawn(async move {
            match request.json(&body).send().await {
                Ok(response) if response.status().is_success() => {
                    tracing::debug!("analytics event delivered");
                }
                Ok(response) => {
                    tracing::warn!("Analytics collect returned {}", response.status());
                }
                Err(e) => {
                    tracing::warn!("Failed to send analytics event: {e}");
                }
            }
        });
    }
}

/// Pick the sink matching the configuration
pub fn sink_from_config(config: Option<AnalyticsConfig>) -> Result<Box<dyn AnalyticsSink>> {
    match config {
        Some(config) => Ok(Box::new(MeasurementProtocolSink::new(config)?)),
        None => Ok(Box::new(TracingSink)),
    }
}
