// ABOUTME: Raw tool arguments as delivered by the transport
// ABOUTME: Typed accessors for strings, integers, booleans and embedded JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::{Map, Value};

/// Deserialized arguments of one tool call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolArgs(Map<String, Value>);

impl ToolArgs {
    /// Wrap an argument object
    #[must_use]
    pub const fn new(arguments: Map<String, Value>) -> Self {
        Self(arguments)
    }

    /// String argument; non-string values are ignored
    #[must_use]
    pub fn str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Integer argument; integral numbers and numeric strings are accepted
    #[must_use]
    pub fn int(&self, key: &str) -> Option<i64> {
        match self.0.get(key)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Boolean argument; `"true"`/`"false"` strings are accepted
    #[must_use]
    pub fn bool(&self, key: &str) -> Option<bool> {
        match self.0.get(key)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// JSON argument as text: strings pass through, other values are
    /// re-serialized, null is absent
    #[must_use]
    pub fn json_text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl From<Value> for ToolArgs {
    /// Non-object values (including null) become empty arguments
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }
}
