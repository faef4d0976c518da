// ABOUTME: Object-safe tool trait, pipeline adapters and the tool registry
// ABOUTME: The transport lists and dispatches tools through ToolRegistry only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::implementations::{
    GetApplicationTool, GetLibraryObservationsTool, GetVulnerabilityTool, ListApplicationLibrariesTool,
    ListApplicationsTool, SearchAttacksTool, SearchVulnerabilitiesTool,
};
use super::{run_paginated, run_single_item, PaginatedTool, SingleItemTool, ToolArgs};
use crate::context::ServerContext;
use crate::errors::{AppError, AppResult};
use crate::mcp::schema::JsonSchema;

/// Serialized envelope of one tool call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResult {
    /// Envelope as JSON
    pub content: Value,
    /// Mirrors the envelope's `success` flag
    pub success: bool,
}

/// A tool as seen by the transport
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Unique tool name
    fn name(&self) -> &'static str;

    /// Human readable description
    fn description(&self) -> &'static str;

    /// JSON schema of the arguments
    fn input_schema(&self) -> JsonSchema;

    /// Run the tool and serialize its envelope
    ///
    /// # Errors
    ///
    /// Returns an error only if the envelope cannot be serialized; tool
    /// failures are reported inside the envelope
    async fn call(&self, args: ToolArgs) -> AppResult<ToolResult>;
}

fn to_result<T: Serialize>(envelope: &T, success: bool) -> AppResult<ToolResult> {
    let content = serde_json::to_value(envelope)
        .map_err(|e| AppError::internal(format!("Failed to serialize tool response: {e}")))?;
    Ok(ToolResult { content, success })
}

/// Exposes a [`SingleItemTool`] as an [`McpTool`]
pub struct SingleItem<T>(pub T);

#[async_trait]
impl<T> McpTool for SingleItem<T>
where
    T: SingleItemTool,
    T::Output: Serialize,
{
    fn name(&self) -> &'static str {
        self.0.name()
    }

    fn description(&self) -> &'static str {
        self.0.description()
    }

    fn input_schema(&self) -> JsonSchema {
        self.0.input_schema()
    }

    async fn call(&self, args: ToolArgs) -> AppResult<ToolResult> {
        let response = run_single_item(&self.0, &args).await;
        to_result(&response, response.is_success())
    }
}

/// Exposes a [`PaginatedTool`] as an [`McpTool`]
pub struct Paginated<T>(pub T);

#[async_trait]
impl<T> McpTool for Paginated<T>
where
    T: PaginatedTool,
    T::Item: Serialize,
{
    fn name(&self) -> &'static str {
        self.0.name()
    }

    fn description(&self) -> &'static str {
        self.0.description()
    }

    fn input_schema(&self) -> JsonSchema {
        self.0.input_schema()
    }

    async fn call(&self, args: ToolArgs) -> AppResult<ToolResult> {
        let response = run_paginated(&self.0, &args).await;
        to_result(&response, response.is_success())
    }
}

/// Entry of `tools/list`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInfo {
    /// Tool name
    pub name: &'static str,
    /// Tool description
    pub description: &'static str,
    /// Argument schema
    pub input_schema: JsonSchema,
}

/// Registered tools, listed in registration order
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn McpTool>>,
    by_name: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    /// Empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every Contrast tool
    ///
    /// # Errors
    ///
    /// Returns an error if two tools share a name
    pub fn with_contrast_tools(context: &Arc<ServerContext>) -> AppResult<Self> {
        let mut registry = Self::new();
        registry.register(Arc::new(Paginated(ListApplicationsTool::new(context.clone()))))?;
        registry.register(Arc::new(SingleItem(GetApplicationTool::new(context.clone()))))?;
        registry.register(Arc::new(Paginated(SearchVulnerabilitiesTool::new(
            context.clone(),
        ))))?;
        registry.register(Arc::new(SingleItem(GetVulnerabilityTool::new(context.clone()))))?;
        registry.register(Arc::new(Paginated(ListApplicationLibrariesTool::new(
            context.clone(),
        ))))?;
        registry.register(Arc::new(SingleItem(GetLibraryObservationsTool::new(
            context.clone(),
        ))))?;
        registry.register(Arc::new(Paginated(SearchAttacksTool::new(context.clone()))))?;
        Ok(registry)
    }

    /// Add a tool
    ///
    /// # Errors
    ///
    /// Returns an error if a tool with the same name is already registered
    pub fn register(&mut self, tool: Arc<dyn McpTool>) -> AppResult<()> {
        let name = tool.name();
        if self.by_name.contains_key(name) {
            return Err(AppError::invalid_input(format!(
                "Tool already registered: {name}"
            )));
        }
        debug!(tool = name, "Registered tool");
        self.by_name.insert(name, self.tools.len());
        self.tools.push(tool);
        Ok(())
    }

    /// Look up a tool by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn McpTool>> {
        self.by_name
            .get(name)
            .and_then(|&index| self.tools.get(index))
            .cloned()
    }

    /// Number of registered tools
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// True when nothing is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Definitions for `tools/list`
    #[must_use]
    pub fn definitions(&self) -> Vec<ToolInfo> {
        self.tools
            .iter()
            .map(|tool| ToolInfo {
                name: tool.name(),
                description: tool.description(),
                input_schema: tool.input_schema(),
            })
            .collect()
    }

    /// Dispatch a call by tool name
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown tool, or an internal error if
    /// the envelope cannot be serialized
    pub async fn call(&self, name: &str, args: ToolArgs) -> AppResult<ToolResult> {
        let tool = self
            .get(name)
            .ok_or_else(|| AppError::not_found(format!("Unknown tool: {name}")))?;
        tool.call(args).await
    }
}
