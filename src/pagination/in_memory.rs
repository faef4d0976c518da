// ABOUTME: Two-stage pagination for filters the Contrast API cannot apply server-side
// ABOUTME: Filters a full result set locally, then slices it with the usual page math
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::PaginationParams;
use crate::tools::ExecutionResult;

/// Slice `items` to the requested page.
///
/// `total_items` is the full length of `items`, so `hasMorePages` reflects
/// the list as given (typically already filtered).
#[must_use]
pub fn paginate_in_memory<T>(items: Vec<T>, pagination: &PaginationParams) -> ExecutionResult<T> {
    let total = items.len();
    let offset = usize::try_from(pagination.offset()).unwrap_or(usize::MAX);

    let page = if offset >= total {
        Vec::new()
    } else {
        items
            .into_iter()
            .skip(offset)
            .take(pagination.page_size() as usize)
            .collect()
    };

    ExecutionResult::new(page, Some(total as u64))
}

/// Keep the items matching `predicate` (preserving order), then paginate
#[must_use]
pub fn filter_then_paginate<T, F>(
    items: Vec<T>,
    predicate: F,
    pagination: &PaginationParams,
) -> ExecutionResult<T>
where
    F: FnMut(&T) -> bool,
{
    let filtered: Vec<T> = items.into_iter().filter(predicate).collect();
    paginate_in_memory(filtered, pagination)
}
