// ABOUTME: Library and library observation models for software composition data
// ABOUTME: Libraries are per-application, observations are per-library class usage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Third party library loaded by an application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Library {
    /// SHA-1 hash identifying the library artifact
    pub hash: String,
    /// Artifact file name
    pub file_name: String,
    /// Resolved version, when known
    #[serde(default)]
    pub version: Option<String>,
    /// Library grade (A through F)
    #[serde(default)]
    pub grade: Option<String>,
    /// Total classes in the artifact
    #[serde(default)]
    pub class_count: u32,
    /// Classes observed in use at runtime
    #[serde(default)]
    pub classes_used: u32,
    /// Known CVE identifiers affecting this version
    #[serde(default)]
    pub vulnerabilities: Vec<String>,
}

/// A class from a library observed in use at runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryObservation {
    /// Fully qualified class name
    pub name: String,
    /// First observation (epoch millis)
    #[serde(default)]
    pub first_observed: Option<i64>,
    /// Most recent observation (epoch millis)
    #[serde(default)]
    pub last_observed: Option<i64>,
}
