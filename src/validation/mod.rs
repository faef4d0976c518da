// ABOUTME: Parameter spec DSL for validating raw tool arguments
// ABOUTME: Specs resolve raw values into typed values plus errors and warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Parameter Validation
//!
//! Each tool argument is described by a small immutable *spec* value
//! (`StringSpec`, `IntSpec`, `DateSpec`, `EnumSetSpec`, `StringListSpec`,
//! `MetadataFilterSpec`). Resolving a spec is pure and yields a
//! [`Resolution`]: the typed value (if any) together with the errors and
//! warnings it produced. A per-call [`ValidationContext`] accumulates those
//! problems alongside the cross-field rules (mutual exclusion, conditional
//! requirement, date-range ordering).
//!
//! Errors mean "fix your input and retry"; warnings mean "a default was
//! applied, a value was clamped, or something was excluded".
//!
//! ```rust
//! use contrast_mcp_server::validation::{IntSpec, ParamSpec, StringSpec, ValidationContext};
//!
//! let mut ctx = ValidationContext::new();
//! let app_id = StringSpec::new("appId", Some("  ")).required().apply(&mut ctx);
//! let limit = IntSpec::new("limit", Some(500)).range(1, 100).apply(&mut ctx);
//!
//! assert!(app_id.is_none());
//! assert_eq!(limit, Some(100));
//! assert_eq!(ctx.errors(), ["appId is required"]);
//! assert_eq!(ctx.warnings().len(), 1);
//! ```

mod context;
mod date;
mod enum_set;
mod int;
mod metadata_filter;
mod string;
mod string_list;

pub use context::ValidationContext;
pub use date::DateSpec;
pub use enum_set::{EnumSetSpec, ParamEnum};
pub use int::IntSpec;
pub use metadata_filter::{MetadataFilter, MetadataFilterSpec};
pub use string::StringSpec;
pub use string_list::StringListSpec;

/// Outcome of resolving one parameter spec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<T> {
    value: Option<T>,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl<T> Resolution<T> {
    /// No value, no problems
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            value: None,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// A resolved value with no problems
    #[must_use]
    pub const fn of(value: T) -> Self {
        Self {
            value: Some(value),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// No value and a single error
    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self::empty().with_error(error)
    }

    /// Append a warning
    #[must_use]
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Append an error
    #[must_use]
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.errors.push(error.into());
        self
    }

    /// Replace the value, keeping recorded problems
    #[must_use]
    pub(crate) fn set_value(mut self, value: Option<T>) -> Self {
        self.value = value;
        self
    }

    /// Resolved value, if any
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Errors in the order they were produced
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Warnings in the order they were produced
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// True when no error was produced
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Split into value, errors and warnings
    #[must_use]
    pub fn into_parts(self) -> (Option<T>, Vec<String>, Vec<String>) {
        (self.value, self.errors, self.warnings)
    }
}

/// A typed description of one raw tool argument.
///
/// `resolve` is pure, so calling it repeatedly always yields the same
/// resolution. `apply` consumes the spec, which guarantees its problems are
/// recorded into a context at most once.
pub trait ParamSpec: Sized {
    /// Resolved value type
    type Value;

    /// Resolve the raw input without touching any context
    fn resolve(&self) -> Resolution<Self::Value>;

    /// Resolve and record problems into `ctx`, returning the value
    fn apply(self, ctx: &mut ValidationContext) -> Option<Self::Value> {
        ctx.absorb(self.resolve())
    }
}

/// Trimmed raw string, `None` when absent or blank
pub(crate) fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

/// Comma-separated tokens, trimmed, with empty tokens dropped
pub(crate) fn split_tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|token| !token.is_empty())
}
