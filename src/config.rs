//! Configuration management for the LotsEye site server.
//!
//! This module handles loading and validating configuration from environment variables.
//! Every setting is optional; an absent contact endpoint means submissions are only
//! logged. The .env file is loaded with `dotenvy`, which does not write to stdout
//! (the MCP channel).

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Configuration for the LotsEye site server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint contact submissions are POSTed to (default: none, log only)
    pub contact_endpoint_url: Option<String>,

    /// Bearer token sent with contact submissions
    pub contact_endpoint_token: Option<String>,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// How long a toast stays visible, in milliseconds (default: 4000)
    pub toast_duration_ms: u64,

    /// Delay between typed characters in milliseconds (default: 100)
    pub typewriter_type_ms: u64,

    /// Delay between deleted characters in milliseconds (default: 50)
    pub typewriter_delete_ms: u64,

    /// Pause on a fully typed headline in milliseconds (default: 2000)
    pub typewriter_hold_ms: u64,

    /// Maximum number of search results to return (default: 5)
    pub max_search_results: usize,

    /// Search confidence threshold (0-100, default: 30)
    pub search_confidence_threshold: u8,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_ENDPOINT_URL`: Where contact submissions are delivered
    /// - `CONTACT_ENDPOINT_TOKEN`: Bearer token for the endpoint
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `TOAST_DURATION_MS`: Toast lifetime (default: 4000)
    /// - `TYPEWRITER_TYPE_MS`: Typing tick (default: 100)
    /// - `TYPEWRITER_DELETE_MS`: Deleting tick (default: 50)
    /// - `TYPEWRITER_HOLD_MS`: Pause before deleting (default: 2000)
    /// - `MAX_SEARCH_RESULTS`: Max search results (default: 5)
    /// - `SEARCH_CONFIDENCE_THRESHOLD`: Min confidence score (default: 30)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let contact_endpoint_url = Self::non_empty_var("CONTACT_ENDPOINT_URL");
        if let Some(url) = &contact_endpoint_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_ENDPOINT_URL".to_string(),
                    reason: "Must start with http:// or https://".to_string(),
                });
            }
        }
        let contact_endpoint_token = Self::non_empty_var("CONTACT_ENDPOINT_TOKEN");

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let toast_duration_ms = Self::parse_env_u64("TOAST_DURATION_MS", 4000)?;
        let typewriter_type_ms = Self::parse_env_u64("TYPEWRITER_TYPE_MS", 100)?;
        let typewriter_delete_ms = Self::parse_env_u64("TYPEWRITER_DELETE_MS", 50)?;
        let typewriter_hold_ms = Self::parse_env_u64("TYPEWRITER_HOLD_MS", 2000)?;

        // A zero tick would spin the typewriter loop
        for (var, value) in [
            ("TYPEWRITER_TYPE_MS", typewriter_type_ms),
            ("TYPEWRITER_DELETE_MS", typewriter_delete_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    var: var.to_string(),
                    reason: "Must be greater than 0".to_string(),
                });
            }
        }

        let max_search_results = Self::parse_env_usize("MAX_SEARCH_RESULTS", 5)?;
        let search_confidence_threshold = Self::parse_env_u8("SEARCH_CONFIDENCE_THRESHOLD", 30)?;

        if search_confidence_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                var: "SEARCH_CONFIDENCE_THRESHOLD".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            contact_endpoint_url,
            contact_endpoint_token,
            request_timeout,
            toast_duration_ms,
            typewriter_type_ms,
            typewriter_delete_ms,
            typewriter_hold_ms,
            max_search_results,
            search_confidence_threshold,
            log_level,
        })
    }

    /// Toast lifetime as a `Duration`.
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    /// Read a variable, treating blank values as unset.
    fn non_empty_var(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
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

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u8 with a default value.
    fn parse_env_u8(var_name: &str, default: u8) -> ConfigResult<u8> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u8>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-255, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contact_endpoint_url: None,
            contact_endpoint_token: None,
            request_timeout: 10,
            toast_duration_ms: 4000,
            typewriter_type_ms: 100,
            typewriter_delete_ms: 50,
            typewriter_hold_ms: 2000,
            max_search_results: 5,
            search_confidence_threshold: 30,
            log_level: "error".to_string(),
        }
    }
}
