// ABOUTME: String parameter spec with trimming, defaults, required and allowed-set checks
// ABOUTME: Blank input resolves to None unless a default or required constraint applies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{non_blank, ParamSpec, Resolution};

/// Spec for a single free-text argument
#[derive(Debug, Clone)]
pub struct StringSpec {
    name: String,
    raw: Option<String>,
    default: Option<(String, String)>,
    required: bool,
    allowed: Option<Vec<String>>,
}

impl StringSpec {
    /// Describe argument `name` with raw input `raw`
    #[must_use]
    pub fn new(name: &str, raw: Option<&str>) -> Self {
        Self {
            name: name.to_owned(),
            raw: raw.map(str::to_owned),
            default: None,
            required: false,
            allowed: None,
        }
    }

    /// Blank input is an error
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Blank input resolves to `value` and records `warning`
    #[must_use]
    pub fn default_to(mut self, value: &str, warning: &str) -> Self {
        self.default = Some((value.to_owned(), warning.to_owned()));
        self
    }

    /// The resolved value must be one of `values` (case-sensitive)
    #[must_use]
    pub fn allowed_values(mut self, values: &[&str]) -> Self {
        self.allowed = Some(values.iter().map(|v| (*v).to_owned()).collect());
        self
    }
}

impl ParamSpec for StringSpec {
    type Value = String;

    fn resolve(&self) -> Resolution<String> {
        let resolution = match (non_blank(self.raw.as_deref()), &self.default) {
            (Some(value), _) => Resolution::of(value.to_owned()),
            (None, Some((value, warning))) => {
                Resolution::of(value.clone()).with_warning(warning.clone())
            }
            (None, None) if self.required => {
                return Resolution::failed(format!("{} is required", self.name));
            }
            (None, None) => return Resolution::empty(),
        };

        let invalid = match (&self.allowed, resolution.value()) {
            (Some(allowed), Some(value)) if !allowed.contains(value) => Some(format!(
                "Invalid {}: '{value}'. Valid values: {}",
                self.name,
                allowed.join(", ")
            )),
            _ => None,
        };

        match invalid {
            Some(error) => resolution.set_value(None).with_error(error),
            None => resolution,
        }
    }
}
