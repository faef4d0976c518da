// ABOUTME: Application model as reported by the Contrast applications endpoint
// ABOUTME: Light projection carrying identity, language and tag information
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// An application onboarded to the Contrast platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Application UUID
    #[serde(alias = "app_id")]
    pub app_id: String,
    /// Display name
    pub name: String,
    /// Agent language (Java, .NET, Node, ...)
    #[serde(default)]
    pub language: Option<String>,
    /// Last time an agent reported for this application (epoch millis)
    #[serde(default, alias = "last_seen")]
    pub last_seen: Option<i64>,
    /// Free form tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Application {
    /// Case-insensitive substring match on the application name
    #[must_use]
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}
