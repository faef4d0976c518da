// ABOUTME: String-list parameter spec parsing comma-separated values
// ABOUTME: Case-sensitive, order-preserving, with an optional allowed-value set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{non_blank, split_tokens, ParamSpec, Resolution};

/// Spec for a comma-separated list of strings
#[derive(Debug, Clone)]
pub struct StringListSpec {
    name: String,
    raw: Option<String>,
    allowed: Option<Vec<String>>,
    default: Option<(Vec<String>, String)>,
}

impl StringListSpec {
    /// Describe argument `name` with raw input `raw`
    #[must_use]
    pub fn new(name: &str, raw: Option<&str>) -> Self {
        Self {
            name: name.to_owned(),
            raw: raw.map(str::to_owned),
            allowed: None,
            default: None,
        }
    }

    /// Every token must be one of `values`
    #[must_use]
    pub fn allowed_values(mut self, values: &[&str]) -> Self {
        self.allowed = Some(values.iter().map(|v| (*v).to_owned()).collect());
        self
    }

    /// Blank input resolves to a copy of `values` and records `warning`
    #[must_use]
    pub fn default_to(mut self, values: &[&str], warning: &str) -> Self {
        self.default = Some((
            values.iter().map(|v| (*v).to_owned()).collect(),
            warning.to_owned(),
        ));
        self
    }
}

impl ParamSpec for StringListSpec {
    type Value = Vec<String>;

    fn resolve(&self) -> Resolution<Vec<String>> {
        let Some(raw) = non_blank(self.raw.as_deref()) else {
            return self.default.as_ref().map_or_else(Resolution::empty, |(values, warning)| {
                Resolution::of(values.clone()).with_warning(warning.clone())
            });
        };

        let mut values: Vec<String> = Vec::new();
        let mut resolution = Resolution::empty();
        for token in split_tokens(raw) {
            if let Some(allowed) = &self.allowed {
                if !allowed.iter().any(|a| a == token) {
                    resolution = resolution.with_error(format!(
                        "Invalid {}: '{token}'. Valid values: {}",
                        self.name,
                        allowed.join(", ")
                    ));
                    continue;
                }
            }
            if !values.iter().any(|v| v == token) {
                values.push(token.to_owned());
            }
        }

        if !resolution.is_valid() || values.is_empty() {
            return resolution;
        }
        resolution.set_value(Some(values))
    }
}
