// ABOUTME: JSON schema types describing tool input arguments
// ABOUTME: Includes builders for the argument shapes shared by several tools
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::pagination::DEFAULT_PAGE_SIZE;
use crate::tools::{PAGE_ARG, PAGE_SIZE_ARG};

/// JSON schema of a tool's argument object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonSchema {
    /// Schema type, always `"object"` for tool inputs
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Argument properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, PropertySchema>>,
    /// Required argument names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

/// Schema of one argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySchema {
    /// JSON type name
    #[serde(rename = "type")]
    pub property_type: String,
    /// Argument description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PropertySchema {
    /// Property of `property_type` described by `description`
    #[must_use]
    pub fn new(property_type: &str, description: &str) -> Self {
        Self {
            property_type: property_type.to_owned(),
            description: Some(description.to_owned()),
        }
    }

    /// String property
    #[must_use]
    pub fn string(description: &str) -> Self {
        Self::new("string", description)
    }

    /// Integer property
    #[must_use]
    pub fn integer(description: &str) -> Self {
        Self::new("integer", description)
    }

    /// Boolean property
    #[must_use]
    pub fn boolean(description: &str) -> Self {
        Self::new("boolean", description)
    }
}

/// Collects properties into a [`JsonSchema`]
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    properties: HashMap<String, PropertySchema>,
    required: Vec<String>,
}

impl SchemaBuilder {
    /// Empty object schema
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an optional property
    #[must_use]
    pub fn property(mut self, name: &str, schema: PropertySchema) -> Self {
        self.properties.insert(name.to_owned(), schema);
        self
    }

    /// Add a required property
    #[must_use]
    pub fn required(mut self, name: &str, schema: PropertySchema) -> Self {
        self.required.push(name.to_owned());
        self.property(name, schema)
    }

    /// Add `page` and `pageSize`
    #[must_use]
    pub fn paginated(self, max_page_size: u32) -> Self {
        let default_size = DEFAULT_PAGE_SIZE.min(max_page_size);
        self.property(PAGE_ARG, PropertySchema::integer("Page number, 1-based. Default: 1"))
            .property(
                PAGE_SIZE_ARG,
                PropertySchema::integer(&format!(
                    "Items per page. Default: {default_size}, maximum: {max_page_size}"
                )),
            )
    }

    /// Finish the schema
    #[must_use]
    pub fn build(self) -> JsonSchema {
        JsonSchema {
            schema_type: "object".to_owned(),
            properties: Some(self.properties),
            required: (!self.required.is_empty()).then_some(self.required),
        }
    }
}
