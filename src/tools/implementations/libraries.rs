// ABOUTME: Third-party library tools backed by the per-application library caches
// ABOUTME: Implements list_application_libraries (paginated) and get_library_observations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::context::ServerContext;
use crate::mcp::schema::{JsonSchema, PropertySchema, SchemaBuilder};
use crate::models::{Library, LibraryObservation};
use crate::pagination::{paginate_in_memory, PaginationParams};
use crate::tools::{
    ExecutionResult, PaginatedTool, SingleItemTool, ToolArgs, ToolDefinition, ToolError,
};
use crate::validation::ValidationContext;

/// Library listings are heavy; pages are kept smaller than the global maximum
pub const LIBRARIES_MAX_PAGE_SIZE: u32 = 50;

// ============================================================================
// ListApplicationLibrariesTool
// ============================================================================

/// Lists the libraries used by one application
pub struct ListApplicationLibrariesTool {
    context: Arc<ServerContext>,
}

impl ListApplicationLibrariesTool {
    /// Tool over `context`
    #[must_use]
    pub const fn new(context: Arc<ServerContext>) -> Self {
        Self { context }
    }
}

impl ToolDefinition for ListApplicationLibrariesTool {
    fn name(&self) -> &'static str {
        "list_application_libraries"
    }

    fn description(&self) -> &'static str {
        "List the third-party libraries of an application with version, grade, class usage and known vulnerabilities."
    }

    fn input_schema(&self) -> JsonSchema {
        SchemaBuilder::new()
            .required("appId", PropertySchema::string("Application UUID"))
            .paginated(self.max_page_size())
            .build()
    }
}

#[async_trait]
impl PaginatedTool for ListApplicationLibrariesTool {
    type Params = String;
    type Item = Library;

    fn max_page_size(&self) -> u32 {
        LIBRARIES_MAX_PAGE_SIZE
    }

    fn parse_params(&self, args: &ToolArgs, ctx: &mut ValidationContext) -> Option<Self::Params> {
        ctx.require_uuid(args.str("appId"), "appId")
    }

    async fn execute(
        &self,
        app_id: Self::Params,
        pagination: &PaginationParams,
        _warnings: &mut Vec<String>,
    ) -> Result<ExecutionResult<Library>, ToolError> {
        let libraries = self.context.application_libraries(&app_id).await?;
        Ok(paginate_in_memory(libraries, pagination))
    }
}

// ============================================================================
// GetLibraryObservationsTool
// ============================================================================

/// Validated `get_library_observations` parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryObservationsParams {
    /// Owning application
    pub app_id: String,
    /// Library hash as reported by `list_application_libraries`
    pub library_hash: String,
}

/// Classes of one library observed at runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryObservations {
    /// Owning application
    pub app_id: String,
    /// Library hash
    pub library_hash: String,
    /// Observed classes
    pub observations: Vec<LibraryObservation>,
}

/// Reports which classes of a library an application actually loads
pub struct GetLibraryObservationsTool {
    context: Arc<ServerContext>,
}

impl GetLibraryObservationsTool {
    /// Tool over `context`
    #[must_use]
    pub const fn new(context: Arc<ServerContext>) -> Self {
        Self { context }
    }
}

impl ToolDefinition for GetLibraryObservationsTool {
    fn name(&self) -> &'static str {
        "get_library_observations"
    }

    fn description(&self) -> &'static str {
        "Get the classes of a library observed at runtime in an application. An empty list means the library is present but unused."
    }

    fn input_schema(&self) -> JsonSchema {
        SchemaBuilder::new()
            .required("appId", PropertySchema::string("Application UUID"))
            .required(
                "libraryHash",
                PropertySchema::string("Library hash from list_application_libraries"),
            )
            .build()
    }
}

#[async_trait]
impl SingleItemTool for GetLibraryObservationsTool {
    type Params = LibraryObservationsParams;
    type Output = LibraryObservations;

    fn parse_params(&self, args: &ToolArgs, ctx: &mut ValidationContext) -> Option<Self::Params> {
        let app_id = ctx.require_uuid(args.str("appId"), "appId");
        let library_hash = ctx.require(args.str("libraryHash"), "libraryHash");
        Some(LibraryObservationsParams {
            app_id: app_id?,
            library_hash: library_hash?,
        })
    }

    async fn execute(
        &self,
        params: Self::Params,
        _warnings: &mut Vec<String>,
    ) -> Result<Option<LibraryObservations>, ToolError> {
        let observations = self
            .context
            .library_observations(&params.app_id, &params.library_hash)
            .await?;
        Ok(Some(LibraryObservations {
            app_id: params.app_id,
            library_hash: params.library_hash,
            observations,
        }))
    }
}
