//! Configuration management for the booking form.
//!
//! This module handles loading and validating configuration from environment variables,
//! with an optional `.env` file loaded through `dotenvy`.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Default EmailJS REST endpoint.
pub const DEFAULT_EMAILJS_API_URL: &str = "https://api.emailjs.com";

/// Default message body placed in every booking email.
pub const DEFAULT_BOOKING_MESSAGE: &str = "Appointment request submitted through the website.";

/// Configuration for the booking form.
#[derive(Debug, Clone)]
pub struct Config {
    /// EmailJS API base URL
    pub emailjs_api_url: String,

    /// EmailJS service identifier (opaque)
    pub service_id: String,

    /// EmailJS template identifier (opaque)
    pub template_id: String,

    /// EmailJS public key, sent as `user_id`
    pub public_key: String,

    /// Optional EmailJS private access token
    pub access_token: Option<String>,

    /// Recipient passed to the template as `to_email`
    pub to_email: String,

    /// Fixed message body passed to the template as `message`
    pub booking_message: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Delay before the modal closes after a successful send (default: 2000)
    pub auto_close_delay_ms: u64,

    /// Fallback tracing filter when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `EMAILJS_SERVICE_ID`
    /// - `EMAILJS_TEMPLATE_ID`
    /// - `EMAILJS_PUBLIC_KEY`
    ///
    /// Optional environment variables:
    /// - `EMAILJS_API_URL`: API base URL (default: https://api.emailjs.com)
    /// - `EMAILJS_ACCESS_TOKEN`: private access token
    /// - `BOOKING_TO_EMAIL`: recipient address (default: empty, template decides)
    /// - `BOOKING_MESSAGE`: message body
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds, non-zero (default: 10)
    /// - `AUTO_CLOSE_DELAY_MS`: modal close delay after success (default: 2000)
    /// - `LOG_LEVEL`: tracing filter used when `RUST_LOG` is unset (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let service_id = Self::required_var("EMAILJS_SERVICE_ID")?;
        let template_id = Self::required_var("EMAILJS_TEMPLATE_ID")?;
        let public_key = Self::required_var("EMAILJS_PUBLIC_KEY")?;

        let emailjs_api_url =
            env::var("EMAILJS_API_URL").unwrap_or_else(|_| DEFAULT_EMAILJS_API_URL.to_string());

        if !emailjs_api_url.starts_with("http://") && !emailjs_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "EMAILJS_API_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let access_token = env::var("EMAILJS_ACCESS_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());

        let to_email = env::var("BOOKING_TO_EMAIL").unwrap_or_default();
        let booking_message =
            env::var("BOOKING_MESSAGE").unwrap_or_else(|_| DEFAULT_BOOKING_MESSAGE.to_string());

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let auto_close_delay_ms = Self::parse_env_u64("AUTO_CLOSE_DELAY_MS", 2000)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            emailjs_api_url,
            service_id,
            template_id,
            public_key,
            access_token,
            to_email,
            booking_message,
            request_timeout,
            auto_close_delay_ms,
            log_level,
        })
    }

    pub fn auto_close_delay(&self) -> Duration {
        Duration::from_millis(self.auto_close_delay_ms)
    }

    /// Read a required variable that must not be blank.
    fn required_var(var_name: &str) -> ConfigResult<String> {
        let value =
            env::var(var_name).map_err(|_| ConfigError::MissingVar(var_name.to_string()))?;

        if value.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(value)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a whole number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            emailjs_api_url: DEFAULT_EMAILJS_API_URL.to_string(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            access_token: None,
            to_email: String::new(),
            booking_message: DEFAULT_BOOKING_MESSAGE.to_string(),
            request_timeout: 10,
            auto_close_delay_ms: 2000,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const REQUIRED: [&str; 3] = [
        "EMAILJS_SERVICE_ID",
        "EMAILJS_TEMPLATE_ID",
        "EMAILJS_PUBLIC_KEY",
    ];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }

        fn set_required(&mut self) {
            self.set("EMAILJS_SERVICE_ID", "service_test");
            self.set("EMAILJS_TEMPLATE_ID", "template_test");
            self.set("EMAILJS_PUBLIC_KEY", "public_test");
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.emailjs_api_url, DEFAULT_EMAILJS_API_URL);
        assert_eq!(config.request_timeout, 10);
        assert_eq!(config.auto_close_delay(), Duration::from_secs(2));
        assert!(config.access_token.is_none());
    }

    #[test]
    #[serial]
    fn test_config_from_env_missing_required() {
        for var in REQUIRED {
            env::remove_var(var);
        }

        match Config::required_var("EMAILJS_SERVICE_ID") {
            Err(ConfigError::MissingVar(var)) => assert_eq!(var, "EMAILJS_SERVICE_ID"),
            other => panic!("Expected MissingVar error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_blank_public_key() {
        let mut guard = EnvGuard::new();
        guard.set_required();
        guard.set("EMAILJS_PUBLIC_KEY", "   ");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "EMAILJS_PUBLIC_KEY"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_url() {
        let mut guard = EnvGuard::new();
        guard.set_required();
        guard.set("EMAILJS_API_URL", "not-a-url");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "EMAILJS_API_URL");
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set_required();
        guard.set("EMAILJS_API_URL", "http://localhost:9000");
        guard.set("BOOKING_TO_EMAIL", "clinic@example.com");
        guard.set("AUTO_CLOSE_DELAY_MS", "500");

        let config = Config::from_env().unwrap();
        assert_eq!(config.service_id, "service_test");
        assert_eq!(config.template_id, "template_test");
        assert_eq!(config.emailjs_api_url, "http://localhost:9000");
        assert_eq!(config.to_email, "clinic@example.com");
        assert_eq!(config.auto_close_delay_ms, 500);
    }

    #[test]
    #[serial]
    fn test_config_from_env_zero_timeout() {
        let mut guard = EnvGuard::new();
        guard.set_required();
        guard.set("REQUEST_TIMEOUT", "0");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, reason }) => {
                assert_eq!(var, "REQUEST_TIMEOUT");
                assert_eq!(reason, "Must be greater than zero");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_log_level() {
        let mut guard = EnvGuard::new();
        guard.set_required();
        guard.set("LOG_LEVEL", "booking_form=debug");
        guard.set("AUTO_CLOSE_DELAY_MS", "0");

        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "booking_form=debug");
        assert_eq!(config.auto_close_delay(), Duration::ZERO);
    }

    #[test]
    #[serial]
    fn test_parse_env_u64_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U64_INVALID", "not-a-number");

        let result = Config::parse_env_u64("TEST_U64_INVALID", 10);
        assert!(result.is_err());

        let result = Config::parse_env_u64("NONEXISTENT_BOOKING_VAR", 10);
        assert_eq!(result.unwrap(), 10);
    }
}
