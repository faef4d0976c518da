// ABOUTME: Failure of a tool's execute step and its translation into user-facing text
// ABOUTME: Upstream and application errors are matched once against a fixed message table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

use crate::errors::{AppError, ErrorCode};
use crate::upstream::UpstreamError;

/// Why an execute step failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// The Contrast API call failed
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// A server-side operation failed
    #[error(transparent)]
    App(#[from] AppError),

    /// Anything else, including a panic inside the execute step
    #[error("{0}")]
    Internal(String),
}

/// Coarse classification used for logging and message selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 401
    Unauthorized,
    /// 403
    Forbidden,
    /// 404 or a typed not-found
    NotFound,
    /// 429
    RateLimited,
    /// 5xx
    ServerError,
    /// Anything else
    Other,
}

impl ErrorKind {
    const fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            429 => Self::RateLimited,
            500..=599 => Self::ServerError,
            _ => Self::Other,
        }
    }

    /// Name used in log fields
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::RateLimited => "rate_limited",
            Self::ServerError => "server_error",
            Self::Other => "other",
        }
    }
}

impl ToolError {
    /// Internal failure with a message
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Classify the failure
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Upstream(error) => match error.status_code() {
                Some(status) => ErrorKind::from_status(status),
                None => ErrorKind::Other,
            },
            Self::App(error) => match error.code {
                ErrorCode::AuthInvalid => ErrorKind::Unauthorized,
                ErrorCode::PermissionDenied => ErrorKind::Forbidden,
                ErrorCode::ResourceNotFound => ErrorKind::NotFound,
                ErrorCode::RateLimitExceeded => ErrorKind::RateLimited,
                ErrorCode::ExternalServiceError => ErrorKind::ServerError,
                ErrorCode::InvalidInput | ErrorCode::ConfigError | ErrorCode::InternalError => {
                    ErrorKind::Other
                }
            },
            Self::Internal(_) => ErrorKind::Other,
        }
    }

    /// Raw detail text, without classification prefixes
    fn detail(&self) -> String {
        match self {
            Self::Upstream(
                UpstreamError::Unauthorized(message)
                | UpstreamError::Forbidden(message)
                | UpstreamError::NotFound(message)
                | UpstreamError::Http { message, .. },
            )
            | Self::App(AppError { message, .. })
            | Self::Internal(message) => message.clone(),
            Self::Upstream(other) => other.to_string(),
        }
    }

    /// Short message shown to the calling agent
    #[must_use]
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::Unauthorized => "Authentication failed. Check API credentials.".to_owned(),
            ErrorKind::Forbidden => {
                "Access denied. Verify API credentials and permissions.".to_owned()
            }
            ErrorKind::NotFound => format!("Resource not found: {}", self.detail()),
            ErrorKind::RateLimited => "Rate limit exceeded. Retry later.".to_owned(),
            ErrorKind::ServerError => "Contrast API error. Try again later.".to_owned(),
            ErrorKind::Other => format!("Internal error: {}", self.detail()),
        }
    }
}
