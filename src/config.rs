//! Configuration handling for the contact form
//!
//! Values come from `config.json` in the platform config directory and are
//! then overridden by environment variables (a `.env` file is honored).

use crate::delivery::DEFAULT_ENDPOINT;
use crate::state::DEFAULT_TOAST_LIFETIME;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

const ENV_SERVICE_ID: &str = "EMAILJS_SERVICE_ID";
const ENV_TEMPLATE_ID: &str = "EMAILJS_TEMPLATE_ID";
const ENV_PUBLIC_KEY: &str = "EMAILJS_PUBLIC_KEY";
const ENV_ENDPOINT: &str = "EMAILJS_ENDPOINT";
const ENV_TIMEOUT_SECS: &str = "EMAILJS_TIMEOUT_SECS";
const ENV_MEASUREMENT_ID: &str = "GA_MEASUREMENT_ID";
const ENV_API_SECRET: &str = "GA_API_SECRET";
const ENV_THEME: &str = "CONTACT_THEME";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Color scheme used by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ConfigError::InvalidValue {
                key: ENV_THEME,
                value: s.to_string(),
            }),
        }
    }
}

/// The three identifiers needed to address the delivery service
#[derive(Clone, PartialEq, Eq)]
pub struct DeliverySecrets {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl fmt::Debug for DeliverySecrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeliverySecrets")
            .field("service_id", &self.service_id)
            .field("template_id", &self.template_id)
            .field("public_key", &"<redacted>")
            .finish()
    }
}

/// GA4 Measurement Protocol credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsConfig {
    pub measurement_id: String,
    pub api_secret: String,
}

/// User configuration for the contact form
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ContactConfig {
    /// EmailJS service identifier
    pub service_id: Option<String>,
    /// EmailJS template identifier
    pub template_id: Option<String>,
    /// EmailJS public key
    pub public_key: Option<String>,
    /// EmailJS API origin
    pub endpoint: Option<String>,
    pub request_timeout_secs: Option<u64>,
    /// GA4 measurement id; analytics stays local when unset
    pub measurement_id: Option<String>,
    pub analytics_api_secret: Option<String>,
    pub theme: Option<Theme>,
    pub toast_lifetime_ms: Option<u64>,
}

impl ContactConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("dev", "portfolio", "contact-tui")
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Get the log file path
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("contact-tui.log"))
    }

    /// Load configuration from the config file and the environment
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Override fields from environment-style lookups
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let string_keys: [(&str, &mut Option<String>); 6] = [
            (ENV_SERVICE_ID, &mut self.service_id),
            (ENV_TEMPLATE_ID, &mut self.template_id),
            (ENV_PUBLIC_KEY, &mut self.public_key),
            (ENV_ENDPOINT, &mut self.endpoint),
            (ENV_MEASUREMENT_ID, &mut self.measurement_id),
            (ENV_API_SECRET, &mut self.analytics_api_secret),
        ];
        for (key, slot) in string_keys {
            if let Some(value) = lookup(key) {
                *slot = Some(value);
            }
        }

        if let Some(value) = lookup(ENV_TIMEOUT_SECS) {
            let secs = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: ENV_TIMEOUT_SECS,
                    value: value.clone(),
                })?;
            self.request_timeout_secs = Some(secs);
        }

        if let Some(value) = lookup(ENV_THEME) {
            self.theme = Some(value.parse()?);
        }

        Ok(())
    }

    /// The delivery secrets, or `None` if any of them is missing or blank
    pub fn delivery_secrets(&self) -> Option<DeliverySecrets> {
        let present = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        Some(DeliverySecrets {
            service_id: present(&self.service_id)?,
            template_id: present(&self.template_id)?,
            public_key: present(&self.public_key)?,
        })
    }

    pub fn analytics(&self) -> Option<AnalyticsConfig> {
        match (&self.measurement_id, &self.analytics_api_secret) {
            (Some(id), Some(secret)) if !id.trim().is_empty() && !secret.trim().is_empty() => {
                Some(AnalyticsConfig {
                    measurement_id: id.trim().to_string(),
                    api_secret: secret.trim().to_string(),
                })
            }
            _ => None,
        }
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    pub fn toast_lifetime(&self) -> Duration {
        self.toast_lifetime_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TOAST_LIFETIME)
    }

    pub fn theme(&self) -> Theme {
        self.theme.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn full_secrets() -> ContactConfig {
        ContactConfig {
            service_id: Some("service_abc".to_string()),
            template_id: Some("template_xyz".to_string()),
            public_key: Some("pk_123".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = ContactConfig::default();
        assert!(config.delivery_secrets().is_none());
        assert!(config.analytics().is_none());
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
        assert_eq!(config.toast_lifetime(), Duration::from_millis(5000));
        assert_eq!(config.theme(), Theme::Light);
    }

    #[test]
    fn test_delivery_secrets_present() {
        let secrets = full_secrets().delivery_secrets().unwrap();
        assert_eq!(secrets.service_id, "service_abc");
        assert_eq!(secrets.template_id, "template_xyz");
        assert_eq!(secrets.public_key, "pk_123");
    }

    #[test]
    fn test_any_missing_secret_is_none() {
        let mut config = full_secrets();
        config.template_id = None;
        assert!(config.delivery_secrets().is_none());

        let mut config = full_secrets();
        config.public_key = Some("   ".to_string());
        assert!(config.delivery_secrets().is_none());

        let mut config = full_secrets();
        config.service_id = Some(String::new());
        assert!(config.delivery_secrets().is_none());
    }

    #[test]
    fn test_secrets_debug_hides_public_key() {
        let secrets = full_secrets().delivery_secrets().unwrap();
        let debug_str = format!("{secrets:?}");
        assert!(debug_str.contains("service_abc"));
        assert!(!debug_str.contains("pk_123"));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = full_secrets();
        config
            .apply_env(env(&[
                ("EMAILJS_SERVICE_ID", "service_env"),
                ("EMAILJS_TIMEOUT_SECS", "30"),
                ("CONTACT_THEME", "Dark"),
            ]))
            .unwrap();

        assert_eq!(config.service_id.as_deref(), Some("service_env"));
        assert_eq!(config.template_id.as_deref(), Some("template_xyz"));
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.theme(), Theme::Dark);
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let mut config = ContactConfig::default();
        let err = config
            .apply_env(env(&[("EMAILJS_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "EMAILJS_TIMEOUT_SECS",
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_theme_is_rejected() {
        assert!("purple".parse::<Theme>().is_err());
        assert_eq!(" light ".parse::<Theme>().unwrap(), Theme::Light);
    }

    #[test]
    fn test_analytics_needs_both_values() {
        let mut config = ContactConfig {
            measurement_id: Some("G-TEST".to_string()),
            ..Default::default()
        };
        assert!(config.analytics().is_none());

        config.analytics_api_secret = Some("secret".to_string());
        assert_eq!(
            config.analytics(),
            Some(AnalyticsConfig {
                measurement_id: "G-TEST".to_string(),
                api_secret: "secret".to_string(),
            })
        );
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: ContactConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, ContactConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"service_id": "svc", "theme": "dark", "unknown_field": "value"}"#;
        let parsed: ContactConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.service_id.as_deref(), Some("svc"));
        assert_eq!(parsed.theme, Some(Theme::Dark));
    }

    #[test]
    fn test_from_file_reports_malformed_json() {
        let path = std::env::temp_dir().join(format!("contact-tui-{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, "{ not json").unwrap();

        let err = ContactConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let path = std::env::temp_dir().join(format!("contact-tui-missing-{}.json", uuid::Uuid::new_v4()));
        let err = ContactConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = ContactConfig::config_path();
    }
}
