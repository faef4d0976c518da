// ABOUTME: Error type returned by the Contrast API boundary
// ABOUTME: Preserves the HTTP status so the pipeline can map it to a user-facing message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Failure talking to the Contrast API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    /// Credentials missing or rejected (401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Credentials lack permission for the resource (403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Resource does not exist (404)
    #[error("{0}")]
    NotFound(String),

    /// Any other non-success status
    #[error("HTTP {status}: {message}")]
    Http {
        /// Response status code
        status: u16,
        /// Response body or reason phrase
        message: String,
    },

    /// Connection, timeout or other transport failure
    #[error("I/O error: {0}")]
    Io(String),

    /// Response body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl UpstreamError {
    /// Classify a non-success HTTP status
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 => Self::Unauthorized(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::Http { status, message },
        }
    }

    /// HTTP status behind this error, when there is one
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::Http { status, .. } => Some(*status),
            Self::Io(_) | Self::Decode(_) => None,
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            return Self::Decode(error.to_string());
        }
        error.status().map_or_else(
            || Self::Io(error.to_string()),
            |status| Self::from_status(status.as_u16(), error.to_string()),
        )
    }
}

/// Result alias for upstream calls
pub type UpstreamResult<T> = Result<T, UpstreamError>;
