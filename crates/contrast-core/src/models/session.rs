// ABOUTME: Agent session metadata models used for session-scoped filtering
// ABOUTME: A session carries labelled metadata values (branch, build number, ...)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// One labelled value attached to an agent session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataItem {
    /// Display label of the field (e.g. "Branch Name")
    pub display_label: String,
    /// Recorded value
    pub value: String,
}

/// Metadata recorded by an agent for one session
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionMetadata {
    /// Agent session identifier
    pub agent_session_id: String,
    /// Labelled values
    #[serde(default)]
    pub metadata: Vec<MetadataItem>,
}

impl SessionMetadata {
    /// True when an item with the given label matches the value.
    ///
    /// Labels and values compare case-insensitively. A `None` value matches
    /// any item carrying the label.
    #[must_use]
    pub fn matches(&self, label: &str, value: Option<&str>) -> bool {
        self.metadata.iter().any(|item| {
            item.display_label.eq_ignore_ascii_case(label)
                && value.is_none_or(|v| item.value.eq_ignore_ascii_case(v))
        })
    }
}
