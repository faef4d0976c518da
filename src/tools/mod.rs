// ABOUTME: Tool execution framework and Contrast tool implementations
// ABOUTME: Envelopes, single-item and paginated pipelines, error mapping and registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Framework
//!
//! A tool implements [`SingleItemTool`] or [`PaginatedTool`]: it parses its
//! arguments through the validation DSL and supplies one `execute` callback.
//! The runners [`run_single_item`] and [`run_paginated`] own everything else
//! (pagination, short-circuiting on validation errors, error mapping, timing)
//! so no tool can skip those steps.

mod args;
mod errors;
/// Contrast tools built on the framework
pub mod implementations;
mod pipeline;
mod registry;
mod response;
mod result;

pub use args::ToolArgs;
pub use errors::{ErrorKind, ToolError};
pub use pipeline::{
    run_paginated, run_single_item, PaginatedTool, SingleItemTool, ToolDefinition, PAGE_ARG,
    PAGE_SIZE_ARG,
};
pub use registry::{McpTool, Paginated, SingleItem, ToolInfo, ToolRegistry, ToolResult};
pub use response::{PaginatedToolResponse, ToolResponse};
pub use result::ExecutionResult;
