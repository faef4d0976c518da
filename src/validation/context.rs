// ABOUTME: Per-call accumulator of validation errors and warnings
// ABOUTME: Hosts cross-field rules such as mutual exclusion and date-range ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{non_blank, Resolution};

/// Length of the canonical hyphenated UUID form (8-4-4-4-12)
const HYPHENATED_UUID_LEN: usize = 36;

/// Errors and warnings collected while parsing one tool call.
///
/// Create one per invocation; both lists only grow.
#[derive(Debug, Default)]
pub struct ValidationContext {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationContext {
    /// Empty context
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Record an error
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }

    /// Record a warning
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Record a resolution's problems and hand back its value
    pub fn absorb<T>(&mut self, resolution: Resolution<T>) -> Option<T> {
        let (value, errors, warnings) = resolution.into_parts();
        self.errors.extend(errors);
        self.warnings.extend(warnings);
        value
    }

    /// Errors in the order they were recorded
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Warnings in the order they were recorded
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// True when no error has been recorded
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consume into `(errors, warnings)`
    #[must_use]
    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.errors, self.warnings)
    }

    // ========================================================================
    // Cross-field rules
    // ========================================================================

    /// Blank or missing `value` is an error. Returns the trimmed value.
    pub fn require(&mut self, value: Option<&str>, name: &str) -> Option<String> {
        let trimmed = non_blank(value);
        if trimmed.is_none() {
            self.add_error(format!("{name} is required"));
        }
        trimmed.map(str::to_owned)
    }

    /// Like [`Self::require`], and the value must be a hyphenated UUID
    pub fn require_uuid(&mut self, value: Option<&str>, name: &str) -> Option<String> {
        let value = self.require(value, name)?;
        if value.len() == HYPHENATED_UUID_LEN && Uuid::try_parse(&value).is_ok() {
            Some(value)
        } else {
            self.add_error(format!(
                "{name} must be in UUID format (xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx), got '{value}'"
            ));
            None
        }
    }

    /// `dependent` being set makes `required` mandatory
    pub fn require_if_present(
        &mut self,
        dependent: Option<&str>,
        dependent_name: &str,
        required: Option<&str>,
        required_name: &str,
    ) {
        if non_blank(dependent).is_some() && non_blank(required).is_none() {
            self.add_error(format!(
                "{dependent_name} requires {required_name} to be specified"
            ));
        }
    }

    /// At most one of the two fields may be supplied
    pub fn mutually_exclusive(
        &mut self,
        a_present: bool,
        a_name: &str,
        b_present: bool,
        b_name: &str,
        message: &str,
    ) {
        if a_present && b_present {
            let base = format!("{a_name} and {b_name} are mutually exclusive");
            if message.trim().is_empty() {
                self.add_error(base);
            } else {
                self.add_error(format!("{base}. {message}"));
            }
        }
    }

    /// Every value blank is a single error carrying `message`
    pub fn require_at_least_one(&mut self, message: &str, values: &[Option<&str>]) {
        if values.iter().all(|value| non_blank(*value).is_none()) {
            self.add_error(message);
        }
    }

    /// Start after end is an error; a missing bound is always valid
    pub fn validate_date_range(
        &mut self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        start_name: &str,
        end_name: &str,
    ) {
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                self.add_error(format!(
                    "Invalid date range: {start_name} must be before {end_name}"
                ));
            }
        }
    }

    /// Record `message` as a warning when `condition` holds
    pub fn warn_if(&mut self, condition: bool, message: impl Into<String>) {
        if condition {
            self.add_warning(message);
        }
    }
}
