// ABOUTME: Vulnerability (trace) model plus severity, status and environment enums
// ABOUTME: Enum wire names are upper snake case, matching the Contrast filter API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use super::SessionMetadata;

/// Vulnerability severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Critical
    Critical,
    /// High
    High,
    /// Medium
    Medium,
    /// Low
    Low,
    /// Informational
    Note,
}

impl Severity {
    /// Every severity in declaration order
    pub const ALL: &'static [Self] = &[
        Self::Critical,
        Self::High,
        Self::Medium,
        Self::Low,
        Self::Note,
    ];

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
            Self::Note => "NOTE",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Triage status of a vulnerability
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TraceStatus {
    /// Newly reported, untriaged
    Reported,
    /// Flagged as suspicious
    Suspicious,
    /// Confirmed as a real issue
    Confirmed,
    /// Triaged as a false positive
    NotAProblem,
    /// Marked remediated by a user
    Remediated,
    /// Fixed in code
    Fixed,
    /// Remediated automatically by the platform
    AutoRemediated,
}

impl TraceStatus {
    /// Every status in declaration order
    pub const ALL: &'static [Self] = &[
        Self::Reported,
        Self::Suspicious,
        Self::Confirmed,
        Self::NotAProblem,
        Self::Remediated,
        Self::Fixed,
        Self::AutoRemediated,
    ];

    /// Statuses that represent open work
    pub const OPEN: &'static [Self] = &[Self::Reported, Self::Suspicious, Self::Confirmed];

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reported => "REPORTED",
            Self::Suspicious => "SUSPICIOUS",
            Self::Confirmed => "CONFIRMED",
            Self::NotAProblem => "NOT_A_PROBLEM",
            Self::Remediated => "REMEDIATED",
            Self::Fixed => "FIXED",
            Self::AutoRemediated => "AUTO_REMEDIATED",
        }
    }
}

impl fmt::Display for TraceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server environment an agent reports from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Environment {
    /// Development
    Development,
    /// QA
    Qa,
    /// Production
    Production,
}

impl Environment {
    /// Every environment in declaration order
    pub const ALL: &'static [Self] = &[Self::Development, Self::Qa, Self::Production];

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "DEVELOPMENT",
            Self::Qa => "QA",
            Self::Production => "PRODUCTION",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vulnerability found by an agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trace {
    /// Vulnerability identifier
    pub uuid: String,
    /// Short description
    pub title: String,
    /// Rule that fired (e.g. "sql-injection")
    pub rule_name: String,
    /// Severity
    pub severity: Severity,
    /// Triage status
    pub status: TraceStatus,
    /// Owning application
    #[serde(default)]
    pub app_id: Option<String>,
    /// First detection (epoch millis)
    #[serde(default)]
    pub first_time_seen: Option<i64>,
    /// Last detection (epoch millis)
    #[serde(default)]
    pub last_time_seen: Option<i64>,
    /// Tags applied by users
    #[serde(default)]
    pub tags: Vec<String>,
    /// Sessions during which the vulnerability was observed
    #[serde(default)]
    pub session_metadata: Vec<SessionMetadata>,
}

impl Trace {
    /// True when any observing session carries a matching metadata item
    #[must_use]
    pub fn seen_in_session_matching(&self, label: &str, value: Option<&str>) -> bool {
        self.session_metadata
            .iter()
            .any(|session| session.matches(label, value))
    }

    /// True when the vulnerability was observed in the given agent session
    #[must_use]
    pub fn seen_in_session(&self, agent_session_id: &str) -> bool {
        self.session_metadata
            .iter()
            .any(|session| session.agent_session_id == agent_session_id)
    }
}
