// ABOUTME: Attack model for runtime protection events
// ABOUTME: Summarizes one attack with its source, rules and time window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of an attack as recorded by runtime protection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttackStatus {
    /// Attack was blocked
    Blocked,
    /// Attack reached the vulnerable code path
    Exploited,
    /// Attack was observed but not acted on
    Probed,
    /// Attack was suspicious
    Suspicious,
}

impl AttackStatus {
    /// Every status in declaration order
    pub const ALL: &'static [Self] = &[
        Self::Blocked,
        Self::Exploited,
        Self::Probed,
        Self::Suspicious,
    ];

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blocked => "BLOCKED",
            Self::Exploited => "EXPLOITED",
            Self::Probed => "PROBED",
            Self::Suspicious => "SUSPICIOUS",
        }
    }
}

impl fmt::Display for AttackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A runtime attack against one or more applications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attack {
    /// Attack identifier
    pub uuid: String,
    /// Outcome
    pub status: AttackStatus,
    /// Attacker address
    #[serde(default)]
    pub source_ip: Option<String>,
    /// Protection rules triggered
    #[serde(default)]
    pub rules: Vec<String>,
    /// Number of probes in the attack
    #[serde(default)]
    pub probes: u64,
    /// Start of the attack (epoch millis)
    #[serde(default)]
    pub start_time: Option<i64>,
    /// End of the attack (epoch millis)
    #[serde(default)]
    pub end_time: Option<i64>,
}
