// ABOUTME: Unified error types with standard error codes for the Contrast MCP server
// ABOUTME: Defines ErrorCode, AppError and the AppResult alias used across crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Every fallible operation outside the upstream boundary returns
//! [`AppResult`]. The [`ErrorCode`] carried by an [`AppError`] decides how the
//! tool pipeline reports the failure to the calling agent.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input failed validation
    InvalidInput,
    /// Requested resource does not exist
    ResourceNotFound,
    /// Credentials missing or rejected
    AuthInvalid,
    /// Credentials valid but not allowed to access the resource
    PermissionDenied,
    /// Too many requests
    RateLimitExceeded,
    /// An external service (the Contrast API) failed
    ExternalServiceError,
    /// Server configuration is missing or malformed
    ConfigError,
    /// Anything else
    InternalError,
}

impl ErrorCode {
    /// HTTP status code conventionally associated with this error code
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::AuthInvalid => 401,
            Self::PermissionDenied => 403,
            Self::ResourceNotFound => 404,
            Self::RateLimitExceeded => 429,
            Self::ExternalServiceError => 502,
            Self::ConfigError | Self::InternalError => 500,
        }
    }

    /// Short human readable description of the code
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid input",
            Self::ResourceNotFound => "Resource not found",
            Self::AuthInvalid => "Authentication failed",
            Self::PermissionDenied => "Permission denied",
            Self::RateLimitExceeded => "Rate limit exceeded",
            Self::ExternalServiceError => "External service error",
            Self::ConfigError => "Configuration error",
            Self::InternalError => "Internal error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Application error with a code and a message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct AppError {
    /// Error classification
    pub code: ErrorCode,
    /// Detail message
    pub message: String,
}

impl AppError {
    /// Create an error with an explicit code
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Invalid input supplied by the caller
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Resource lookup failed
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceNotFound, resource)
    }

    /// Authentication failure
    pub fn auth_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AuthInvalid, message)
    }

    /// Authorization failure
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PermissionDenied, message)
    }

    /// Configuration missing or malformed
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Unexpected internal failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Failure reported by an external service
    pub fn external_service(service: &str, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{service}: {}", message.into()),
        )
    }
}

/// Result alias used throughout the server
pub type AppResult<T> = Result<T, AppError>;
