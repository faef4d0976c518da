// ABOUTME: Application tools backed by the cached organization application list
// ABOUTME: Implements list_applications (paginated) and get_application (single item)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::context::ServerContext;
use crate::mcp::schema::{JsonSchema, PropertySchema, SchemaBuilder};
use crate::models::Application;
use crate::pagination::{filter_then_paginate, PaginationParams};
use crate::tools::{
    ExecutionResult, PaginatedTool, SingleItemTool, ToolArgs, ToolDefinition, ToolError,
};
use crate::validation::{ParamSpec, StringSpec, ValidationContext};

// ============================================================================
// ListApplicationsTool
// ============================================================================

/// Filters accepted by `list_applications`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListApplicationsParams {
    /// Case-insensitive name substring
    pub name: Option<String>,
}

/// Lists the organization's applications, optionally filtered by name
pub struct ListApplicationsTool {
    context: Arc<ServerContext>,
}

impl ListApplicationsTool {
    /// Tool over `context`
    #[must_use]
    pub const fn new(context: Arc<ServerContext>) -> Self {
        Self { context }
    }
}

impl ToolDefinition for ListApplicationsTool {
    fn name(&self) -> &'static str {
        "list_applications"
    }

    fn description(&self) -> &'static str {
        "List applications in the Contrast organization. Optionally filter by a case-insensitive name substring."
    }

    fn input_schema(&self) -> JsonSchema {
        SchemaBuilder::new()
            .property(
                "name",
                PropertySchema::string("Only applications whose name contains this text"),
            )
            .paginated(self.max_page_size())
            .build()
    }
}

#[async_trait]
impl PaginatedTool for ListApplicationsTool {
    type Params = ListApplicationsParams;
    type Item = Application;

    fn parse_params(&self, args: &ToolArgs, ctx: &mut ValidationContext) -> Option<Self::Params> {
        let name = StringSpec::new("name", args.str("name")).apply(ctx);
        Some(ListApplicationsParams { name })
    }

    async fn execute(
        &self,
        params: Self::Params,
        pagination: &PaginationParams,
        _warnings: &mut Vec<String>,
    ) -> Result<ExecutionResult<Application>, ToolError> {
        let applications = self.context.applications().await?;
        Ok(filter_then_paginate(
            applications,
            |app| {
                params
                    .name
                    .as_deref()
                    .is_none_or(|needle| app.name_contains(needle))
            },
            pagination,
        ))
    }
}

// ============================================================================
// GetApplicationTool
// ============================================================================

/// How `get_application` identifies the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationLookup {
    /// Exact application id
    ById(String),
    /// Exact name, compared case-insensitively
    ByName(String),
}

impl ApplicationLookup {
    fn find(&self, applications: Vec<Application>) -> Option<Application> {
        applications.into_iter().find(|app| match self {
            Self::ById(id) => app.app_id == *id,
            Self::ByName(name) => app.name.eq_ignore_ascii_case(name),
        })
    }
}

/// Looks up one application by id or by name
pub struct GetApplicationTool {
    context: Arc<ServerContext>,
}

impl GetApplicationTool {
    /// Tool over `context`
    #[must_use]
    pub const fn new(context: Arc<ServerContext>) -> Self {
        Self { context }
    }
}

impl ToolDefinition for GetApplicationTool {
    fn name(&self) -> &'static str {
        "get_application"
    }

    fn description(&self) -> &'static str {
        "Get one application by appId or by exact name. Provide exactly one of the two."
    }

    fn input_schema(&self) -> JsonSchema {
        SchemaBuilder::new()
            .property("appId", PropertySchema::string("Application UUID"))
            .property(
                "appName",
                PropertySchema::string("Exact application name (case-insensitive)"),
            )
            .build()
    }
}

#[async_trait]
impl SingleItemTool for GetApplicationTool {
    type Params = ApplicationLookup;
    type Output = Application;

    fn parse_params(&self, args: &ToolArgs, ctx: &mut ValidationContext) -> Option<Self::Params> {
        let app_id = StringSpec::new("appId", args.str("appId")).apply(ctx);
        let app_name = StringSpec::new("appName", args.str("appName")).apply(ctx);

        ctx.require_at_least_one(
            "Either appId or appName must be provided",
            &[app_id.as_deref(), app_name.as_deref()],
        );
        ctx.mutually_exclusive(
            app_id.is_some(),
            "appId",
            app_name.is_some(),
            "appName",
            "Provide only one of them",
        );

        match (app_id, app_name) {
            (Some(id), None) => Some(ApplicationLookup::ById(id)),
            (None, Some(name)) => Some(ApplicationLookup::ByName(name)),
            _ => None,
        }
    }

    async fn execute(
        &self,
        params: Self::Params,
        _warnings: &mut Vec<String>,
    ) -> Result<Option<Application>, ToolError> {
        if let Some(app) = params.find(self.context.applications().await?) {
            return Ok(Some(app));
        }

        // The cached list may predate the application; look once more on fresh data
        debug!(lookup = ?params, "Application not in cached list, refreshing");
        Ok(params.find(self.context.refresh_applications().await?))
    }
}
