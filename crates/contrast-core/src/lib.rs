// ABOUTME: Core crate root for shared Contrast MCP server types
// ABOUTME: Exposes the unified error types and the upstream domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Contrast Core
//!
//! Types shared between the server crate and anything that talks to it:
//! - **errors**: `ErrorCode`, `AppError` and the `AppResult` alias
//! - **models**: DTOs for the Contrast platform resources (applications,
//!   vulnerabilities, libraries, sessions, attacks)

/// Unified error handling with standard error codes
pub mod errors;

/// Contrast platform domain models
pub mod models;
