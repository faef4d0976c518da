// ABOUTME: Attack search tool over the Contrast Protect attacks endpoint
// ABOUTME: Quick filter, status, keyword and date filters with server-side pagination
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use async_trait::async_trait;

use crate::context::ServerContext;
use crate::mcp::schema::{JsonSchema, PropertySchema, SchemaBuilder};
use crate::models::{Attack, AttackStatus};
use crate::pagination::PaginationParams;
use crate::tools::{ExecutionResult, PaginatedTool, ToolArgs, ToolDefinition, ToolError};
use crate::upstream::AttackFilter;
use crate::validation::{DateSpec, EnumSetSpec, ParamSpec, StringSpec, ValidationContext};

/// Predefined attack views accepted by the API
pub const QUICK_FILTERS: &[&str] = &[
    "ALL",
    "ACTIVE",
    "MANUAL",
    "AUTOMATED",
    "PRODUCTION",
    "EFFECTIVE",
];

/// Sort keys accepted by the API; a leading `-` sorts descending
pub const SORT_FIELDS: &[&str] = &[
    "startTime",
    "-startTime",
    "endTime",
    "-endTime",
    "sourceIP",
    "-sourceIP",
    "status",
    "-status",
];

/// Searches attacks detected by Contrast Protect
pub struct SearchAttacksTool {
    context: Arc<ServerContext>,
}

impl SearchAttacksTool {
    /// Tool over `context`
    #[must_use]
    pub const fn new(context: Arc<ServerContext>) -> Self {
        Self { context }
    }
}

impl ToolDefinition for SearchAttacksTool {
    fn name(&self) -> &'static str {
        "search_attacks"
    }

    fn description(&self) -> &'static str {
        "Search attacks detected by Contrast Protect, filtered by quick filter, outcome, keyword and time window."
    }

    fn input_schema(&self) -> JsonSchema {
        SchemaBuilder::new()
            .property(
                "quickFilter",
                PropertySchema::string(
                    "One of ALL, ACTIVE, MANUAL, AUTOMATED, PRODUCTION, EFFECTIVE",
                ),
            )
            .property(
                "statuses",
                PropertySchema::string("Comma-separated: BLOCKED, EXPLOITED, PROBED, SUSPICIOUS"),
            )
            .property("keyword", PropertySchema::string("Free text search"))
            .property(
                "includeSuppressed",
                PropertySchema::boolean("Include suppressed attacks. Default: false"),
            )
            .property("startDate", PropertySchema::string("Epoch milliseconds or YYYY-MM-DD"))
            .property("endDate", PropertySchema::string("Epoch milliseconds or YYYY-MM-DD"))
            .property(
                "sort",
                PropertySchema::string("Sort field, prefix with - for descending, e.g. -startTime"),
            )
            .paginated(self.max_page_size())
            .build()
    }
}

#[async_trait]
impl PaginatedTool for SearchAttacksTool {
    type Params = AttackFilter;
    type Item = Attack;

    fn parse_params(&self, args: &ToolArgs, ctx: &mut ValidationContext) -> Option<Self::Params> {
        let quick_filter_raw = args.str("quickFilter").map(str::to_uppercase);
        let quick_filter = StringSpec::new("quickFilter", quick_filter_raw.as_deref())
            .allowed_values(QUICK_FILTERS)
            .apply(ctx);
        let statuses = EnumSetSpec::<AttackStatus>::new("statuses", args.str("statuses")).apply(ctx);
        let keyword = StringSpec::new("keyword", args.str("keyword")).apply(ctx);
        let sort = StringSpec::new("sort", args.str("sort"))
            .allowed_values(SORT_FIELDS)
            .apply(ctx);

        let start_date = DateSpec::new("startDate", args.str("startDate")).apply(ctx);
        let end_date = DateSpec::new("endDate", args.str("endDate")).apply(ctx);
        ctx.validate_date_range(start_date, end_date, "startDate", "endDate");

        Some(AttackFilter {
            quick_filter,
            statuses: statuses.unwrap_or_default().into_iter().collect(),
            keyword,
            include_suppressed: args.bool("includeSuppressed").unwrap_or(false),
            start_date,
            end_date,
            sort,
            offset: 0,
            limit: 0,
        })
    }

    async fn execute(
        &self,
        mut filter: Self::Params,
        pagination: &PaginationParams,
        _warnings: &mut Vec<String>,
    ) -> Result<ExecutionResult<Attack>, ToolError> {
        filter.offset = pagination.offset();
        filter.limit = pagination.limit();
        let page = self.context.api().search_attacks(&filter).await?;
        Ok(page.into())
    }
}
