// ABOUTME: Metadata filter spec parsing a flat JSON object into field/value filters
// ABOUTME: Values must be scalars or arrays of scalars; field order is preserved
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{non_blank, ParamSpec, Resolution};

/// Match one metadata field against any of several values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataFilter {
    /// Metadata field label
    pub field: String,
    /// Accepted values (any match)
    pub values: Vec<String>,
}

/// Spec for a JSON object of metadata field filters, e.g.
/// `{"branch": "main", "build": [41, 42]}`
#[derive(Debug, Clone)]
pub struct MetadataFilterSpec {
    name: String,
    raw: Option<String>,
}

impl MetadataFilterSpec {
    /// Describe argument `name` with raw input `raw`
    #[must_use]
    pub fn new(name: &str, raw: Option<&str>) -> Self {
        Self {
            name: name.to_owned(),
            raw: raw.map(str::to_owned),
        }
    }

    fn unsupported_value(&self, field: &str) -> String {
        format!(
            "Invalid {}: field '{field}' has an unsupported value. Only string or array-of-string values are accepted",
            self.name
        )
    }
}

/// String form of a scalar, `None` for objects, arrays and null
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

impl ParamSpec for MetadataFilterSpec {
    type Value = Vec<MetadataFilter>;

    fn resolve(&self) -> Resolution<Vec<MetadataFilter>> {
        let Some(raw) = non_blank(self.raw.as_deref()) else {
            return Resolution::empty();
        };

        let parsed: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                return Resolution::failed(format!("Invalid {}: not valid JSON ({e})", self.name));
            }
        };

        let Value::Object(fields) = parsed else {
            return Resolution::failed(format!(
                "Invalid {}: expected a JSON object mapping field names to values",
                self.name
            ));
        };

        let mut filters = Vec::with_capacity(fields.len());
        let mut resolution = Resolution::empty();
        for (field, value) in &fields {
            let values = match value {
                Value::Array(items) => items.iter().map(scalar_to_string).collect(),
                scalar => scalar_to_string(scalar).map(|s| vec![s]),
            };
            match values {
                Some(values) if values.is_empty() => {}
                Some(values) => filters.push(MetadataFilter {
                    field: field.clone(),
                    values,
                }),
                None => resolution = resolution.with_error(self.unsupported_value(field)),
            }
        }

        if !resolution.is_valid() || filters.is_empty() {
            return resolution;
        }
        resolution.set_value(Some(filters))
    }
}
