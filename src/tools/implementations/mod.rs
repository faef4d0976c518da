// ABOUTME: Contrast tools built on the single-item and paginated pipelines
// ABOUTME: Applications, vulnerabilities, libraries and attacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Contrast Tools
//!
//! - `list_applications`, `get_application`
//! - `search_vulnerabilities`, `get_vulnerability`
//! - `list_application_libraries`, `get_library_observations`
//! - `search_attacks`

/// Application lookup tools
pub mod applications;
/// Attack search tool
pub mod attacks;
/// Third-party library tools
pub mod libraries;
/// Vulnerability search and lookup tools
pub mod vulnerabilities;

pub use applications::{GetApplicationTool, ListApplicationsTool};
pub use attacks::SearchAttacksTool;
pub use libraries::{GetLibraryObservationsTool, LibraryObservations, ListApplicationLibrariesTool};
pub use vulnerabilities::{GetVulnerabilityTool, SearchVulnerabilitiesTool, DEFAULT_STATUSES_WARNING};
