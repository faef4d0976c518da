// ABOUTME: Main library entry point for the Contrast Security MCP server
// ABOUTME: Exposes validation, pagination, caching and the tool execution pipelines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Contrast MCP Server
//!
//! A Model Context Protocol (MCP) server that turns the Contrast Security REST
//! API into tools an AI assistant can call. Every tool runs through the same
//! invocation framework:
//!
//! - **Validation**: typed parameter specs accumulate errors and warnings in a
//!   per-call `ValidationContext` before any network access
//! - **Pagination**: raw `page`/`pageSize` arguments are clamped into a
//!   canonical `PaginationParams`, never rejected
//! - **Caching**: slow-changing lookups (applications, libraries, class
//!   usage) go through explicitly owned TTL caches
//! - **Pipelines**: single-item and paginated runners that map upstream
//!   failures onto a fixed set of user-facing messages
//! - **Envelopes**: `ToolResponse` / `PaginatedToolResponse` are the complete
//!   contract with the transport
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use contrast_mcp_server::config::environment::ServerConfig;
//! use contrast_mcp_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Contrast MCP Server configured for org {}", config.contrast.org_id);
//!     Ok(())
//! }
//! ```

/// TTL caches for slow-changing upstream data
pub mod cache;

/// Environment configuration
pub mod config;

/// Application constants and default values
pub mod constants;

/// Long-lived server context shared by all tools
pub mod context;

/// Unified error handling
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// Model Context Protocol schema types and stdio transport
pub mod mcp;

/// Contrast platform domain models
pub mod models;

/// Page normalization and in-memory pagination
pub mod pagination;

/// Tool envelopes, execution pipelines, registry and tool implementations
pub mod tools;

/// Boundary to the Contrast REST API
pub mod upstream;

/// Parameter spec DSL and validation context
pub mod validation;
