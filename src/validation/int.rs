// ABOUTME: Integer parameter spec with warning-carrying defaults and range clamping
// ABOUTME: Out-of-range values are clamped to the nearest bound, never rejected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ParamSpec, Resolution};

/// Spec for a single integer argument
#[derive(Debug, Clone)]
pub struct IntSpec {
    name: String,
    raw: Option<i64>,
    default: Option<(i64, String)>,
    range: Option<(i64, i64)>,
    required: bool,
}

impl IntSpec {
    /// Describe argument `name` with raw input `raw`
    #[must_use]
    pub fn new(name: &str, raw: Option<i64>) -> Self {
        Self {
            name: name.to_owned(),
            raw,
            default: None,
            range: None,
            required: false,
        }
    }

    /// Missing input resolves to `value` and records `warning`
    #[must_use]
    pub fn default_to(mut self, value: i64, warning: &str) -> Self {
        self.default = Some((value, warning.to_owned()));
        self
    }

    /// Clamp the resolved value into `min..=max`
    #[must_use]
    pub const fn range(mut self, min: i64, max: i64) -> Self {
        self.range = Some((min, max));
        self
    }

    /// Missing input without a default is an error
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

impl ParamSpec for IntSpec {
    type Value = i64;

    fn resolve(&self) -> Resolution<i64> {
        let (value, mut resolution) = match (self.raw, &self.default) {
            (Some(value), _) => (value, Resolution::empty()),
            (None, Some((value, warning))) => {
                (*value, Resolution::empty().with_warning(warning.clone()))
            }
            (None, None) if self.required => {
                return Resolution::failed(format!("{} is required", self.name));
            }
            (None, None) => return Resolution::empty(),
        };

        let clamped = match self.range {
            Some((min, _)) if value < min => {
                resolution = resolution.with_warning(format!(
                    "{} {value} is below minimum {min}, using {min}",
                    self.name
                ));
                min
            }
            Some((_, max)) if value > max => {
                resolution = resolution.with_warning(format!(
                    "{} {value} exceeds maximum {max}, using {max}",
                    self.name
                ));
                max
            }
            _ => value,
        };

        resolution.set_value(Some(clamped))
    }
}
