//! Configuration management for the contact flow.
//!
//! Values come from environment variables. A `.env` file is loaded first if
//! present; a missing file is not an error.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Default WhatsApp number for the fallback channel (country + area code + number).
pub const DEFAULT_WHATSAPP_NUMBER: &str = "5581985596965";

/// Default greeting pre-filled in the fallback link.
pub const DEFAULT_WHATSAPP_GREETING: &str =
    "Olá! Gostaria de solicitar um orçamento para criação do meu site.";

/// Allowed notice display window, in seconds.
const NOTICE_DURATION_RANGE: std::ops::RangeInclusive<u64> = 5..=7;

/// Configuration for the contact flow.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL; the form posts to `{api_base_url}/api/contact`
    pub api_base_url: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// How long a success/failure notice stays visible, in seconds (default: 7)
    pub notice_duration_secs: u64,

    /// Number used in the WhatsApp fallback link
    pub whatsapp_number: String,

    /// Greeting text pre-filled in the WhatsApp fallback link
    pub whatsapp_greeting: String,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `CONTACT_API_BASE_URL`: Base URL of the backend
    ///
    /// Optional environment variables:
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `NOTICE_DURATION_SECS`: Notice display window, 5-7 (default: 7)
    /// - `WHATSAPP_NUMBER`: Fallback number, digits only
    /// - `WHATSAPP_GREETING`: Fallback greeting text
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let api_base_url = env::var("CONTACT_API_BASE_URL")
            .map_err(|_| ConfigError::MissingVar("CONTACT_API_BASE_URL".to_string()))?;

        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let notice_duration_secs = Self::parse_env_u64("NOTICE_DURATION_SECS", 7)?;

        if !NOTICE_DURATION_RANGE.contains(&notice_duration_secs) {
            return Err(ConfigError::InvalidValue {
                var: "NOTICE_DURATION_SECS".to_string(),
                reason: format!(
                    "Must be between {} and {} seconds, got: {}",
                    NOTICE_DURATION_RANGE.start(),
                    NOTICE_DURATION_RANGE.end(),
                    notice_duration_secs
                ),
            });
        }

        let whatsapp_number =
            env::var("WHATSAPP_NUMBER").unwrap_or_else(|_| DEFAULT_WHATSAPP_NUMBER.to_string());

        if whatsapp_number.is_empty() || !whatsapp_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidValue {
                var: "WHATSAPP_NUMBER".to_string(),
                reason: "Must contain digits only".to_string(),
            });
        }

        let whatsapp_greeting = env::var("WHATSAPP_GREETING")
            .unwrap_or_else(|_| DEFAULT_WHATSAPP_GREETING.to_string());

        if whatsapp_greeting.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "WHATSAPP_GREETING".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            api_base_url,
            request_timeout,
            notice_duration_secs,
            whatsapp_number,
            whatsapp_greeting,
            log_level,
        })
    }

    /// Notice display window as a `Duration`.
    pub fn notice_duration(&self) -> Duration {
        Duration::from_secs(self.notice_duration_secs)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: String::new(),
            request_timeout: 10,
            notice_duration_secs: 7,
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            whatsapp_greeting: DEFAULT_WHATSAPP_GREETING.to_string(),
            log_level: "warn".to_string(),
        }
    }
}
