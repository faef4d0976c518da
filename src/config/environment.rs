// ABOUTME: Environment variable parsing for Contrast credentials, cache TTLs and logging
// ABOUTME: Missing required variables and unparsable numbers are configuration errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Environment Configuration
//!
//! | Variable | Default |
//! |---|---|
//! | `CONTRAST_HOST_NAME` | required |
//! | `CONTRAST_API_KEY` | required |
//! | `CONTRAST_SERVICE_KEY` | required |
//! | `CONTRAST_USERNAME` | required |
//! | `CONTRAST_ORG_ID` | required |
//! | `CONTRAST_PROTOCOL` | `https` |
//! | `CONTRAST_HTTP_TIMEOUT_SECS` | `30` |
//! | `CONTRAST_APPLICATIONS_CACHE_TTL_SECS` | `300` |
//! | `CONTRAST_LIBRARIES_CACHE_TTL_SECS` | `600` |
//! | `CONTRAST_CACHE_MAX_ENTRIES` | `500000` |
//! | `RUST_LOG` | `info` |
//! | `LOG_FORMAT` | `json` |

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::CacheConfig;
use crate::constants::cache::{APPLICATIONS_TTL_SECS, LIBRARIES_TTL_SECS, MAX_ENTRIES};
use crate::constants::http::{DEFAULT_PROTOCOL, DEFAULT_TIMEOUT_SECS};
use crate::errors::{AppError, AppResult};
use crate::logging::{LogFormat, LoggingConfig};

/// Connection settings for the Contrast platform
#[derive(Clone)]
pub struct ContrastConfig {
    /// Host name of the Contrast TeamServer (e.g. `app.contrastsecurity.com`)
    pub host_name: String,
    /// Organization API key
    pub api_key: String,
    /// User service key
    pub service_key: String,
    /// User name the service key belongs to
    pub username: String,
    /// Organization UUID every call is scoped to
    pub org_id: String,
    /// URL scheme (`https` unless testing against a local server)
    pub protocol: String,
    /// Per-request timeout
    pub http_timeout: Duration,
}

impl fmt::Debug for ContrastConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContrastConfig")
            .field("host_name", &self.host_name)
            .field("api_key", &"[REDACTED]")
            .field("service_key", &"[REDACTED]")
            .field("username", &self.username)
            .field("org_id", &self.org_id)
            .field("protocol", &self.protocol)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Contrast connection
    pub contrast: ContrastConfig,
    /// Cache TTLs and capacity
    pub cache: CacheConfig,
    /// Log level and output format
    pub logging: LoggingConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a required variable is missing or
    /// a numeric variable cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        let contrast = ContrastConfig {
            host_name: required_var("CONTRAST_HOST_NAME")?,
            api_key: required_var("CONTRAST_API_KEY")?,
            service_key: required_var("CONTRAST_SERVICE_KEY")?,
            username: required_var("CONTRAST_USERNAME")?,
            org_id: required_var("CONTRAST_ORG_ID")?,
            protocol: optional_var("CONTRAST_PROTOCOL")
                .unwrap_or_else(|| DEFAULT_PROTOCOL.to_owned()),
            http_timeout: Duration::from_secs(parsed_var(
                "CONTRAST_HTTP_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )?),
        };

        let cache = CacheConfig {
            applications_ttl: Duration::from_secs(parsed_var(
                "CONTRAST_APPLICATIONS_CACHE_TTL_SECS",
                APPLICATIONS_TTL_SECS,
            )?),
            libraries_ttl: Duration::from_secs(parsed_var(
                "CONTRAST_LIBRARIES_CACHE_TTL_SECS",
                LIBRARIES_TTL_SECS,
            )?),
            max_entries: parsed_var("CONTRAST_CACHE_MAX_ENTRIES", MAX_ENTRIES)?,
        };

        let logging = LoggingConfig {
            level: optional_var("RUST_LOG").unwrap_or_else(|| "info".to_owned()),
            format: optional_var("LOG_FORMAT")
                .map(|value| LogFormat::from_str_param(&value))
                .unwrap_or_default(),
        };

        Ok(Self {
            contrast,
            cache,
            logging,
        })
    }
}

/// Non-blank value of `name`, if set
fn optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn required_var(name: &str) -> AppResult<String> {
    optional_var(name)
        .ok_or_else(|| AppError::config(format!("Missing required environment variable {name}")))
}

fn parsed_var<T>(name: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    optional_var(name).map_or(Ok(default), |value| {
        value
            .parse()
            .map_err(|e| AppError::config(format!("Invalid value '{value}' for {name}: {e}")))
    })
}
