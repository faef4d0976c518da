// ABOUTME: Items produced by a paginated tool's execute step plus the optional total
// ABOUTME: The total is None when the upstream source cannot report one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::upstream::Page;

/// Output of a paginated execute step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult<T> {
    items: Vec<T>,
    total_items: Option<u64>,
}

impl<T> ExecutionResult<T> {
    /// Items with an optional known total
    #[must_use]
    pub const fn new(items: Vec<T>, total_items: Option<u64>) -> Self {
        Self { items, total_items }
    }

    /// Items whose total is unknown
    #[must_use]
    pub const fn with_unknown_total(items: Vec<T>) -> Self {
        Self::new(items, None)
    }

    /// No items, known total of zero
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new(), Some(0))
    }

    /// Items of this page
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Total matching items across all pages
    #[must_use]
    pub const fn total_items(&self) -> Option<u64> {
        self.total_items
    }

    /// Map each item, keeping the total
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> ExecutionResult<U> {
        ExecutionResult::new(self.items.into_iter().map(f).collect(), self.total_items)
    }

    /// Split into items and total
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, Option<u64>) {
        (self.items, self.total_items)
    }
}

impl<T> From<Page<T>> for ExecutionResult<T> {
    fn from(page: Page<T>) -> Self {
        Self::new(page.items, page.total)
    }
}
