// ABOUTME: Immutable response envelopes returned by the tool pipelines
// ABOUTME: ToolResponse for single items, PaginatedToolResponse for pages of items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Response Envelopes
//!
//! Envelopes are the complete contract with the transport. Fields are private
//! and only the constructors below create envelopes, which keeps the
//! invariants intact:
//! - `errors` non-empty implies `success == false`
//! - `found == false` with no errors means "nothing matched"
//! - lists are never null

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::pagination::PaginationParams;

/// Envelope for a tool returning at most one item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResponse<T> {
    data: Option<T>,
    errors: Vec<String>,
    warnings: Vec<String>,
    found: bool,
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration_ms: Option<u64>,
}

impl<T> ToolResponse<T> {
    /// The item was found
    #[must_use]
    pub const fn success(data: T, warnings: Vec<String>) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
            warnings,
            found: true,
            success: true,
            duration_ms: None,
        }
    }

    /// Nothing matched; not an error
    #[must_use]
    pub const fn not_found(warnings: Vec<String>) -> Self {
        Self {
            data: None,
            errors: Vec::new(),
            warnings,
            found: false,
            success: true,
            duration_ms: None,
        }
    }

    /// Parameters were rejected before any upstream call
    #[must_use]
    pub const fn validation_failed(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            data: None,
            errors,
            warnings,
            found: false,
            success: false,
            duration_ms: None,
        }
    }

    /// Execution failed with a user-facing message
    #[must_use]
    pub fn error(message: impl Into<String>, warnings: Vec<String>) -> Self {
        Self::validation_failed(vec![message.into()], warnings)
    }

    /// Attach the elapsed time
    #[must_use]
    pub fn with_duration(mut self, elapsed: Duration) -> Self {
        self.duration_ms = Some(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Payload, when found
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Take the payload
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Errors in order
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Warnings in order
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Whether an item was found
    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.found
    }

    /// Whether the call succeeded (a miss is still a success)
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// Elapsed milliseconds, when recorded
    #[must_use]
    pub const fn duration_ms(&self) -> Option<u64> {
        self.duration_ms
    }
}

/// Envelope for a tool returning one page of items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedToolResponse<T> {
    items: Vec<T>,
    page: u32,
    page_size: u32,
    total_items: Option<u64>,
    has_more_pages: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration_ms: Option<u64>,
}

impl<T> PaginatedToolResponse<T> {
    /// A page was produced
    #[must_use]
    pub fn success(
        items: Vec<T>,
        pagination: &PaginationParams,
        total_items: Option<u64>,
        has_more_pages: bool,
        warnings: Vec<String>,
    ) -> Self {
        Self {
            items,
            page: pagination.page(),
            page_size: pagination.page_size(),
            total_items,
            has_more_pages,
            errors: Vec::new(),
            warnings,
            success: true,
            duration_ms: None,
        }
    }

    /// Parameters were rejected before any upstream call
    #[must_use]
    pub fn validation_failed(
        pagination: &PaginationParams,
        errors: Vec<String>,
        warnings: Vec<String>,
    ) -> Self {
        Self {
            items: Vec::new(),
            page: pagination.page(),
            page_size: pagination.page_size(),
            total_items: None,
            has_more_pages: false,
            errors,
            warnings,
            success: false,
            duration_ms: None,
        }
    }

    /// Execution failed with a user-facing message
    #[must_use]
    pub fn error(
        pagination: &PaginationParams,
        message: impl Into<String>,
        warnings: Vec<String>,
    ) -> Self {
        Self::validation_failed(pagination, vec![message.into()], warnings)
    }

    /// Attach the elapsed time
    #[must_use]
    pub fn with_duration(mut self, elapsed: Duration) -> Self {
        self.duration_ms = Some(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Items of this page
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Take the items
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Echoed page number
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Echoed page size
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Total matching items, when known
    #[must_use]
    pub const fn total_items(&self) -> Option<u64> {
        self.total_items
    }

    /// Whether another page likely exists
    #[must_use]
    pub const fn has_more_pages(&self) -> bool {
        self.has_more_pages
    }

    /// Errors in order
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Warnings in order
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Whether the call succeeded
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// Elapsed milliseconds, when recorded
    #[must_use]
    pub const fn duration_ms(&self) -> Option<u64> {
        self.duration_ms
    }
}
