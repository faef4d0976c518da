// ABOUTME: Tests for environment configuration loading and log format parsing
// ABOUTME: Serialized because they mutate process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(missing_docs, clippy::unwrap_used)]

use std::env;
use std::time::Duration;

use contrast_mcp_server::config::environment::ServerConfig;
use contrast_mcp_server::errors::ErrorCode;
use contrast_mcp_server::logging::LogFormat;
use serial_test::serial;

const REQUIRED: &[(&str, &str)] = &[
    ("CONTRAST_HOST_NAME", "app.contrastsecurity.com"),
    ("CONTRAST_API_KEY", "api-key-secret"),
    ("CONTRAST_SERVICE_KEY", "service-key-secret"),
    ("CONTRAST_USERNAME", "agent@example.com"),
    ("CONTRAST_ORG_ID", "0b1c2d3e-4f50-6172-8394-a5b6c7d8e9f0"),
];

const OPTIONAL: &[&str] = &[
    "CONTRAST_PROTOCOL",
    "CONTRAST_HTTP_TIMEOUT_SECS",
    "CONTRAST_APPLICATIONS_CACHE_TTL_SECS",
    "CONTRAST_LIBRARIES_CACHE_TTL_SECS",
    "CONTRAST_CACHE_MAX_ENTRIES",
    "RUST_LOG",
    "LOG_FORMAT",
];

fn reset_env() {
    for (name, value) in REQUIRED {
        env::set_var(name, value);
    }
    for name in OPTIONAL {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_defaults_apply_when_optional_vars_absent() {
    reset_env();
    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.contrast.host_name, "app.contrastsecurity.com");
    assert_eq!(config.contrast.protocol, "https");
    assert_eq!(config.contrast.http_timeout, Duration::from_secs(30));
    assert_eq!(config.cache.applications_ttl, Duration::from_secs(300));
    assert_eq!(config.cache.libraries_ttl, Duration::from_secs(600));
    assert_eq!(config.cache.max_entries, 500_000);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
#[serial]
fn test_overrides_are_parsed() {
    reset_env();
    env::set_var("CONTRAST_PROTOCOL", "http");
    env::set_var("CONTRAST_HTTP_TIMEOUT_SECS", "5");
    env::set_var("CONTRAST_APPLICATIONS_CACHE_TTL_SECS", " 60 ");
    env::set_var("CONTRAST_CACHE_MAX_ENTRIES", "1000");
    env::set_var("LOG_FORMAT", "Pretty");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.contrast.protocol, "http");
    assert_eq!(config.contrast.http_timeout, Duration::from_secs(5));
    assert_eq!(config.cache.applications_ttl, Duration::from_secs(60));
    assert_eq!(config.cache.max_entries, 1000);
    assert_eq!(config.logging.format, LogFormat::Pretty);
    reset_env();
}

#[test]
#[serial]
fn test_missing_required_var_is_config_error() {
    reset_env();
    env::remove_var("CONTRAST_SERVICE_KEY");

    let error = ServerConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigError);
    assert_eq!(
        error.message,
        "Missing required environment variable CONTRAST_SERVICE_KEY"
    );
    reset_env();
}

#[test]
#[serial]
fn test_blank_required_var_counts_as_missing() {
    reset_env();
    env::set_var("CONTRAST_ORG_ID", "   ");

    let error = ServerConfig::from_env().unwrap_err();
    assert!(error.message.ends_with("CONTRAST_ORG_ID"));
    reset_env();
}

#[test]
#[serial]
fn test_unparsable_number_is_config_error() {
    reset_env();
    env::set_var("CONTRAST_LIBRARIES_CACHE_TTL_SECS", "ten");

    let error = ServerConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigError);
    assert!(error
        .message
        .starts_with("Invalid value 'ten' for CONTRAST_LIBRARIES_CACHE_TTL_SECS"));
    reset_env();
}

#[test]
#[serial]
fn test_debug_output_redacts_keys() {
    reset_env();
    let config = ServerConfig::from_env().unwrap();
    let debug = format!("{config:?}");

    assert!(!debug.contains("api-key-secret"));
    assert!(!debug.contains("service-key-secret"));
    assert!(debug.contains("[REDACTED]"));
    assert!(debug.contains("agent@example.com"));
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_param("json"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_param(" COMPACT "), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_param("pretty"), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str_param("xml"), LogFormat::Json);
    assert_eq!(LogFormat::Compact.to_string(), "compact");
}
