// ABOUTME: Single-item and paginated execution pipelines shared by every tool
// ABOUTME: Runners own parsing, validation short-circuit, error mapping and timing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Execution Pipelines
//!
//! ```text
//! single:    parse -> validate -> execute -> (None: not found) -> success
//! paginated: normalize pagination -> parse -> validate -> execute
//!            -> has_more_pages -> success
//! ```
//!
//! Both runners make a single pass. Failures of the execute step, including
//! panics, are translated once through [`ToolError::user_message`]. Warnings
//! are kept in the order pagination, parameters, execution.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::time::Instant;

use async_trait::async_trait;
use futures_util::FutureExt;
use tracing::{debug, info, warn};

use super::{ExecutionResult, PaginatedToolResponse, ToolArgs, ToolError, ToolResponse};
use crate::constants::messages::{NO_RESULTS, RESOURCE_NOT_FOUND};
use crate::constants::pagination::MAX_PAGE_SIZE;
use crate::mcp::schema::JsonSchema;
use crate::pagination::PaginationParams;
use crate::validation::ValidationContext;

/// Argument carrying the 1-based page number
pub const PAGE_ARG: &str = "page";
/// Argument carrying the requested page size
pub const PAGE_SIZE_ARG: &str = "pageSize";

/// Name, description and input schema advertised to MCP clients
pub trait ToolDefinition {
    /// Unique tool name
    fn name(&self) -> &'static str;

    /// Human readable description for the agent
    fn description(&self) -> &'static str;

    /// JSON schema of the accepted arguments
    fn input_schema(&self) -> JsonSchema;
}

/// A tool returning at most one item
#[async_trait]
pub trait SingleItemTool: ToolDefinition + Send + Sync {
    /// Validated parameters
    type Params: Send;
    /// Item returned on success
    type Output: Send;

    /// Build parameters from raw arguments, recording problems in `ctx`.
    ///
    /// Returning `None` without recording an error is treated as a
    /// validation failure as well.
    fn parse_params(&self, args: &ToolArgs, ctx: &mut ValidationContext) -> Option<Self::Params>;

    /// Fetch the item. `Ok(None)` means nothing matched.
    ///
    /// # Errors
    ///
    /// Returns a [`ToolError`] when the upstream call or local processing fails
    async fn execute(
        &self,
        params: Self::Params,
        warnings: &mut Vec<String>,
    ) -> Result<Option<Self::Output>, ToolError>;
}

/// A tool returning one page of items
#[async_trait]
pub trait PaginatedTool: ToolDefinition + Send + Sync {
    /// Validated parameters
    type Params: Send;
    /// Item type of each page
    type Item: Send;

    /// Largest page size this tool serves
    fn max_page_size(&self) -> u32 {
        MAX_PAGE_SIZE
    }

    /// Build parameters from raw arguments, recording problems in `ctx`
    fn parse_params(&self, args: &ToolArgs, ctx: &mut ValidationContext) -> Option<Self::Params>;

    /// Fetch the page described by `pagination`
    ///
    /// # Errors
    ///
    /// Returns a [`ToolError`] when the upstream call or local processing fails
    async fn execute(
        &self,
        params: Self::Params,
        pagination: &PaginationParams,
        warnings: &mut Vec<String>,
    ) -> Result<ExecutionResult<Self::Item>, ToolError>;
}

// ============================================================================
// Runners
// ============================================================================

/// Parameters ready for execution, or the errors that prevent it
enum Parsed<P> {
    Ready(P),
    Rejected(Vec<String>),
}

fn parse<P>(
    tool_name: &str,
    args: &ToolArgs,
    warnings: &mut Vec<String>,
    parse_params: impl FnOnce(&ToolArgs, &mut ValidationContext) -> Option<P>,
) -> Parsed<P> {
    let mut ctx = ValidationContext::new();
    let params = parse_params(args, &mut ctx);
    let (errors, ctx_warnings) = ctx.into_parts();
    warnings.extend(ctx_warnings);

    match params {
        Some(params) if errors.is_empty() => Parsed::Ready(params),
        _ if errors.is_empty() => {
            Parsed::Rejected(vec![format!("Invalid parameters for {tool_name}")])
        }
        _ => {
            debug!(tool = tool_name, errors = ?errors, "Tool parameters rejected");
            Parsed::Rejected(errors)
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "execution panicked".to_owned())
}

fn flatten<T>(outcome: Result<Result<T, ToolError>, Box<dyn Any + Send>>) -> Result<T, ToolError> {
    outcome.unwrap_or_else(|payload| Err(ToolError::internal(panic_message(payload.as_ref()))))
}

fn report_failure(tool_name: &str, error: &ToolError) -> String {
    let message = error.user_message();
    warn!(
        tool = tool_name,
        kind = error.kind().as_str(),
        error = %error,
        "Tool execution failed"
    );
    message
}

/// Run a single-item tool through the full pipeline
pub async fn run_single_item<T: SingleItemTool>(tool: &T, args: &ToolArgs) -> ToolResponse<T::Output> {
    let started = Instant::now();
    let name = tool.name();
    let mut warnings = Vec::new();

    let params = match parse(name, args, &mut warnings, |args, ctx| tool.parse_params(args, ctx)) {
        Parsed::Ready(params) => params,
        Parsed::Rejected(errors) => {
            return ToolResponse::validation_failed(errors, warnings).with_duration(started.elapsed());
        }
    };

    let outcome = AssertUnwindSafe(tool.execute(params, &mut warnings))
        .catch_unwind()
        .await;

    let response = match flatten(outcome) {
        Ok(Some(item)) => ToolResponse::success(item, warnings),
        Ok(None) => {
            warnings.push(RESOURCE_NOT_FOUND.to_owned());
            ToolResponse::not_found(warnings)
        }
        Err(error) => ToolResponse::error(report_failure(name, &error), warnings),
    }
    .with_duration(started.elapsed());

    info!(
        tool = name,
        success = response.is_success(),
        found = response.is_found(),
        duration_ms = response.duration_ms(),
        "Tool completed"
    );
    response
}

/// Run a paginated tool through the full pipeline
pub async fn run_paginated<T: PaginatedTool>(
    tool: &T,
    args: &ToolArgs,
) -> PaginatedToolResponse<T::Item> {
    let started = Instant::now();
    let name = tool.name();

    let pagination = PaginationParams::with_max_page_size(
        args.int(PAGE_ARG),
        args.int(PAGE_SIZE_ARG),
        tool.max_page_size(),
    );
    let mut warnings = pagination.warnings().to_vec();

    let params = match parse(name, args, &mut warnings, |args, ctx| tool.parse_params(args, ctx)) {
        Parsed::Ready(params) => params,
        Parsed::Rejected(errors) => {
            return PaginatedToolResponse::validation_failed(&pagination, errors, warnings)
                .with_duration(started.elapsed());
        }
    };

    let outcome = AssertUnwindSafe(tool.execute(params, &pagination, &mut warnings))
        .catch_unwind()
        .await;

    let response = match flatten(outcome) {
        Ok(result) => {
            let (items, total_items) = result.into_parts();
            let has_more_pages = pagination.has_more_pages(items.len(), total_items);
            if items.is_empty() && total_items == Some(0) {
                warnings.push(NO_RESULTS.to_owned());
            }
            PaginatedToolResponse::success(items, &pagination, total_items, has_more_pages, warnings)
        }
        Err(error) => PaginatedToolResponse::error(&pagination, report_failure(name, &error), warnings),
    }
    .with_duration(started.elapsed());

    info!(
        tool = name,
        success = response.is_success(),
        page = response.page(),
        page_size = response.page_size(),
        returned = response.items().len(),
        total_items = response.total_items(),
        duration_ms = response.duration_ms(),
        "Tool completed"
    );
    response
}
