// ABOUTME: Vulnerability tools over the Contrast traces endpoints
// ABOUTME: search_vulnerabilities pushes filters down and applies session filters in memory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Vulnerability Tools
//!
//! Severity, status, environment, tag, date and metadata filters are sent to
//! the API with the page window. Session filters (a named metadata value, or
//! "the latest agent session") cannot be expressed upstream: the full
//! filtered set is fetched and narrowed with two-stage pagination.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::context::ServerContext;
use crate::mcp::schema::{JsonSchema, PropertySchema, SchemaBuilder};
use crate::models::{Environment, Severity, Trace, TraceStatus};
use crate::pagination::{filter_then_paginate, PaginationParams};
use crate::tools::{
    ExecutionResult, PaginatedTool, SingleItemTool, ToolArgs, ToolDefinition, ToolError,
};
use crate::upstream::TraceFilter;
use crate::validation::{
    DateSpec, EnumSetSpec, MetadataFilterSpec, ParamSpec, StringListSpec, StringSpec,
    ValidationContext,
};

/// Warning recorded when statuses default to the open set
pub const DEFAULT_STATUSES_WARNING: &str = "No statuses specified, defaulting to open vulnerabilities (REPORTED, SUSPICIOUS, CONFIRMED). Pass statuses explicitly to include FIXED or REMEDIATED.";

// ============================================================================
// SearchVulnerabilitiesTool
// ============================================================================

/// Filters that must be applied after fetching
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionFilter {
    /// Metadata label and optional value an observing session must carry
    pub metadata: Option<(String, Option<String>)>,
    /// Restrict to the application's most recent agent session
    pub latest_session: bool,
}

impl SessionFilter {
    const fn is_empty(&self) -> bool {
        self.metadata.is_none() && !self.latest_session
    }
}

/// Validated `search_vulnerabilities` parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchVulnerabilitiesParams {
    /// Filters pushed down to the API
    pub filter: TraceFilter,
    /// Filters applied in memory
    pub session: SessionFilter,
}

/// Searches vulnerabilities across the organization or within one application
pub struct SearchVulnerabilitiesTool {
    context: Arc<ServerContext>,
}

impl SearchVulnerabilitiesTool {
    /// Tool over `context`
    #[must_use]
    pub const fn new(context: Arc<ServerContext>) -> Self {
        Self { context }
    }
}

impl ToolDefinition for SearchVulnerabilitiesTool {
    fn name(&self) -> &'static str {
        "search_vulnerabilities"
    }

    fn description(&self) -> &'static str {
        "Search vulnerabilities organization-wide or within one application. Filters combine with AND; comma-separated lists combine with OR. Statuses default to open vulnerabilities."
    }

    fn input_schema(&self) -> JsonSchema {
        SchemaBuilder::new()
            .property(
                "appId",
                PropertySchema::string("Application UUID. Omit to search the whole organization"),
            )
            .property(
                "severities",
                PropertySchema::string("Comma-separated: CRITICAL, HIGH, MEDIUM, LOW, NOTE"),
            )
            .property(
                "statuses",
                PropertySchema::string(
                    "Comma-separated: REPORTED, SUSPICIOUS, CONFIRMED, NOT_A_PROBLEM, REMEDIATED, FIXED, AUTO_REMEDIATED. Default: REPORTED, SUSPICIOUS, CONFIRMED",
                ),
            )
            .property(
                "environments",
                PropertySchema::string("Comma-separated: DEVELOPMENT, QA, PRODUCTION"),
            )
            .property(
                "lastSeenAfter",
                PropertySchema::string("Epoch milliseconds or YYYY-MM-DD"),
            )
            .property(
                "lastSeenBefore",
                PropertySchema::string("Epoch milliseconds or YYYY-MM-DD"),
            )
            .property("vulnTags", PropertySchema::string("Comma-separated vulnerability tags"))
            .property(
                "metadataFilters",
                PropertySchema::string(
                    "JSON object of session metadata filters, e.g. {\"branch\":\"main\",\"build\":[\"41\",\"42\"]}",
                ),
            )
            .property(
                "sessionMetadataName",
                PropertySchema::string("Session metadata label to match. Requires appId"),
            )
            .property(
                "sessionMetadataValue",
                PropertySchema::string("Session metadata value to match. Requires sessionMetadataName"),
            )
            .property(
                "useLatestSession",
                PropertySchema::boolean("Only vulnerabilities seen in the latest agent session. Requires appId"),
            )
            .paginated(self.max_page_size())
            .build()
    }
}

#[async_trait]
impl PaginatedTool for SearchVulnerabilitiesTool {
    type Params = SearchVulnerabilitiesParams;
    type Item = Trace;

    fn parse_params(&self, args: &ToolArgs, ctx: &mut ValidationContext) -> Option<Self::Params> {
        let app_id = StringSpec::new("appId", args.str("appId"))
            .apply(ctx)
            .and_then(|id| ctx.require_uuid(Some(id.as_str()), "appId"));

        let severities =
            EnumSetSpec::<Severity>::new("severities", args.str("severities")).apply(ctx);
        let statuses = EnumSetSpec::<TraceStatus>::new("statuses", args.str("statuses"))
            .default_to(TraceStatus::OPEN, DEFAULT_STATUSES_WARNING)
            .apply(ctx);
        let environments =
            EnumSetSpec::<Environment>::new("environments", args.str("environments")).apply(ctx);

        let last_seen_after = DateSpec::new("lastSeenAfter", args.str("lastSeenAfter")).apply(ctx);
        let last_seen_before =
            DateSpec::new("lastSeenBefore", args.str("lastSeenBefore")).apply(ctx);
        ctx.validate_date_range(
            last_seen_after,
            last_seen_before,
            "lastSeenAfter",
            "lastSeenBefore",
        );

        let tags = StringListSpec::new("vulnTags", args.str("vulnTags")).apply(ctx);
        let metadata_text = args.json_text("metadataFilters");
        let metadata_filters =
            MetadataFilterSpec::new("metadataFilters", metadata_text.as_deref()).apply(ctx);

        let session_name =
            StringSpec::new("sessionMetadataName", args.str("sessionMetadataName")).apply(ctx);
        let session_value =
            StringSpec::new("sessionMetadataValue", args.str("sessionMetadataValue")).apply(ctx);
        let latest_session = args.bool("useLatestSession").unwrap_or(false);

        ctx.require_if_present(
            session_value.as_deref(),
            "sessionMetadataValue",
            session_name.as_deref(),
            "sessionMetadataName",
        );
        ctx.require_if_present(
            session_name.as_deref(),
            "sessionMetadataName",
            args.str("appId"),
            "appId",
        );
        ctx.require_if_present(
            latest_session.then_some("true"),
            "useLatestSession",
            args.str("appId"),
            "appId",
        );

        let filter = TraceFilter {
            app_id,
            severities: severities.unwrap_or_default().into_iter().collect(),
            statuses: statuses.unwrap_or_default().into_iter().collect(),
            environments: environments.unwrap_or_default().into_iter().collect(),
            tags: tags.unwrap_or_default(),
            metadata_filters: metadata_filters.unwrap_or_default(),
            last_seen_after,
            last_seen_before,
            offset: None,
            limit: None,
        };

        Some(SearchVulnerabilitiesParams {
            filter,
            session: SessionFilter {
                metadata: session_name.map(|name| (name, session_value)),
                latest_session,
            },
        })
    }

    async fn execute(
        &self,
        params: Self::Params,
        pagination: &PaginationParams,
        warnings: &mut Vec<String>,
    ) -> Result<ExecutionResult<Trace>, ToolError> {
        let SearchVulnerabilitiesParams { filter, session } = params;
        let api = self.context.api();

        if session.is_empty() {
            let page = api.list_vulnerabilities(&filter.paged(pagination)).await?;
            return Ok(page.into());
        }

        let latest_session_id = match (session.latest_session, filter.app_id.as_deref()) {
            (true, Some(app_id)) => {
                let latest = api.latest_session_metadata(app_id).await?;
                if latest.is_none() {
                    warnings.push(format!(
                        "No agent session found for application {app_id}; returning vulnerabilities from all sessions"
                    ));
                }
                latest.map(|metadata| metadata.agent_session_id)
            }
            _ => None,
        };

        let all = api.list_vulnerabilities(&filter.unpaged()).await?.items;
        debug!(
            fetched = all.len(),
            latest_session = ?latest_session_id,
            "Filtering vulnerabilities by session"
        );

        Ok(filter_then_paginate(
            all,
            |trace| {
                latest_session_id
                    .as_deref()
                    .is_none_or(|id| trace.seen_in_session(id))
                    && session.metadata.as_ref().is_none_or(|(label, value)| {
                        trace.seen_in_session_matching(label, value.as_deref())
                    })
            },
            pagination,
        ))
    }
}

// ============================================================================
// GetVulnerabilityTool
// ============================================================================

/// Validated `get_vulnerability` parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetVulnerabilityParams {
    /// Owning application
    pub app_id: String,
    /// Vulnerability identifier
    pub vuln_id: String,
}

/// Fetches one vulnerability with its session metadata
pub struct GetVulnerabilityTool {
    context: Arc<ServerContext>,
}

impl GetVulnerabilityTool {
    /// Tool over `context`
    #[must_use]
    pub const fn new(context: Arc<ServerContext>) -> Self {
        Self { context }
    }
}

impl ToolDefinition for GetVulnerabilityTool {
    fn name(&self) -> &'static str {
        "get_vulnerability"
    }

    fn description(&self) -> &'static str {
        "Get one vulnerability of an application, including the sessions that observed it."
    }

    fn input_schema(&self) -> JsonSchema {
        SchemaBuilder::new()
            .required("appId", PropertySchema::string("Application UUID"))
            .required("vulnId", PropertySchema::string("Vulnerability identifier"))
            .build()
    }
}

#[async_trait]
impl SingleItemTool for GetVulnerabilityTool {
    type Params = GetVulnerabilityParams;
    type Output = Trace;

    fn parse_params(&self, args: &ToolArgs, ctx: &mut ValidationContext) -> Option<Self::Params> {
        let app_id = ctx.require_uuid(args.str("appId"), "appId");
        let vuln_id = ctx.require(args.str("vulnId"), "vulnId");
        Some(GetVulnerabilityParams {
            app_id: app_id?,
            vuln_id: vuln_id?,
        })
    }

    async fn execute(
        &self,
        params: Self::Params,
        _warnings: &mut Vec<String>,
    ) -> Result<Option<Trace>, ToolError> {
        Ok(self
            .context
            .api()
            .get_vulnerability(&params.app_id, &params.vuln_id)
            .await?)
    }
}
