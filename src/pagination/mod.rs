// ABOUTME: Offset pagination normalization for paginated tools
// ABOUTME: Clamps raw page/pageSize into a canonical, always-valid PaginationParams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pagination
//!
//! Pagination mistakes degrade gracefully: a bad `page` or `pageSize` is
//! corrected and reported as a warning, never as an error. For filters the
//! Contrast API cannot apply server-side, [`in_memory`] applies the same
//! page math to a locally filtered list.

pub mod in_memory;

use serde::Serialize;

use crate::constants::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

pub use in_memory::{filter_then_paginate, paginate_in_memory};

/// Canonical `{page, pageSize, offset, limit}` for one paginated call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    page: u32,
    page_size: u32,
    offset: u64,
    limit: u32,
    #[serde(skip)]
    warnings: Vec<String>,
}

impl PaginationParams {
    /// Normalize with the global maximum page size
    #[must_use]
    pub fn of(page: Option<i64>, page_size: Option<i64>) -> Self {
        Self::with_max_page_size(page, page_size, MAX_PAGE_SIZE)
    }

    /// Normalize with a tool-specific maximum page size.
    ///
    /// `max_page_size` is itself clamped into `1..=100`; when it is below the
    /// default page size the default drops to the maximum.
    #[must_use]
    pub fn with_max_page_size(page: Option<i64>, page_size: Option<i64>, max_page_size: u32) -> Self {
        let max = max_page_size.clamp(1, MAX_PAGE_SIZE);
        let default_size = DEFAULT_PAGE_SIZE.min(max);
        let mut warnings = Vec::new();

        let page = match page {
            Some(raw) if raw >= 1 => u32::try_from(raw).unwrap_or(u32::MAX),
            Some(raw) => {
                warnings.push(format!("Invalid page number {raw}, using page 1"));
                1
            }
            None => 1,
        };

        let page_size = match page_size {
            None => default_size,
            Some(raw) if raw < 1 => {
                warnings.push(format!("Invalid pageSize {raw}, using default {default_size}"));
                default_size
            }
            Some(raw) if raw > i64::from(max) => {
                warnings.push(format!(
                    "Requested pageSize {raw} exceeds maximum {max}, capped to {max}"
                ));
                max
            }
            Some(raw) => u32::try_from(raw).unwrap_or(max),
        };

        Self {
            page,
            page_size,
            offset: u64::from(page - 1) * u64::from(page_size),
            limit: page_size,
            warnings,
        }
    }

    /// 1-based page number
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Items per page
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Items to skip: `(page - 1) * page_size`
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.offset
    }

    /// Items to fetch, always equal to `page_size`
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Warnings produced while clamping
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Whether another page likely exists after this one.
    ///
    /// With a known total: `offset + returned < total`. Without one, a full
    /// page is taken to mean more data may follow, so a final page that
    /// happens to be exactly full still reports `true`.
    #[must_use]
    pub fn has_more_pages(&self, returned: usize, total_items: Option<u64>) -> bool {
        total_items.map_or_else(
            || returned == self.limit as usize,
            |total| self.offset.saturating_add(returned as u64) < total,
        )
    }
}
