// ABOUTME: Query objects passed to the Contrast API boundary
// ABOUTME: Carries the server-side filters and optional offset/limit pagination
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{AttackStatus, Environment, Severity, TraceStatus};
use crate::pagination::PaginationParams;
use crate::validation::MetadataFilter;

/// One page of results and the upstream total, when reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items in upstream order
    pub items: Vec<T>,
    /// Total matching items, `None` when unknown
    pub total: Option<u64>,
}

impl<T> Page<T> {
    /// Page with a known total
    #[must_use]
    pub const fn new(items: Vec<T>, total: Option<u64>) -> Self {
        Self { items, total }
    }
}

/// Server-side filters for a vulnerability search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceFilter {
    /// Restrict to one application; `None` searches the organization
    #[serde(skip)]
    pub app_id: Option<String>,
    /// Severities to include (empty means all)
    pub severities: Vec<Severity>,
    /// Statuses to include (empty means all)
    #[serde(rename = "status")]
    pub statuses: Vec<TraceStatus>,
    /// Environments to include (empty means all)
    pub environments: Vec<Environment>,
    /// Vulnerability tags (any match)
    #[serde(rename = "filterTags")]
    pub tags: Vec<String>,
    /// Session metadata filters pushed down to the API
    pub metadata_filters: Vec<MetadataFilter>,
    /// Only vulnerabilities last seen at or after this instant
    #[serde(rename = "startDate", with = "chrono::serde::ts_milliseconds_option")]
    pub last_seen_after: Option<DateTime<Utc>>,
    /// Only vulnerabilities last seen at or before this instant
    #[serde(rename = "endDate", with = "chrono::serde::ts_milliseconds_option")]
    pub last_seen_before: Option<DateTime<Utc>>,
    /// Items to skip; `None` with `limit` `None` requests everything
    #[serde(skip)]
    pub offset: Option<u64>,
    /// Items to return
    #[serde(skip)]
    pub limit: Option<u32>,
}

impl TraceFilter {
    /// Push the page window down to the API
    #[must_use]
    pub fn paged(mut self, pagination: &PaginationParams) -> Self {
        self.offset = Some(pagination.offset());
        self.limit = Some(pagination.limit());
        self
    }

    /// Request the full result set (for in-memory filtering)
    #[must_use]
    pub fn unpaged(mut self) -> Self {
        self.offset = None;
        self.limit = None;
        self
    }
}

/// Server-side filters for an attack search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackFilter {
    /// Predefined attack view (ALL, ACTIVE, EFFECTIVE, ...)
    pub quick_filter: Option<String>,
    /// Outcomes to include (empty means all)
    pub statuses: Vec<AttackStatus>,
    /// Free text search
    pub keyword: Option<String>,
    /// Include suppressed attacks
    pub include_suppressed: bool,
    /// Attacks starting at or after this instant
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub start_date: Option<DateTime<Utc>>,
    /// Attacks starting at or before this instant
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub end_date: Option<DateTime<Utc>>,
    /// Sort field, prefixed with `-` for descending
    #[serde(skip)]
    pub sort: Option<String>,
    /// Items to skip
    #[serde(skip)]
    pub offset: u64,
    /// Items to return
    #[serde(skip)]
    pub limit: u32,
}
