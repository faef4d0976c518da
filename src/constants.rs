// ABOUTME: Application constants for pagination, caching and protocol defaults
// ABOUTME: Centralizes numeric limits so tools and tests share one source of truth
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Pagination defaults
pub mod pagination {
    /// Page size used when the caller supplies none or an invalid one
    pub const DEFAULT_PAGE_SIZE: u32 = 50;
    /// Upper bound for any tool's page size
    pub const MAX_PAGE_SIZE: u32 = 100;
}

/// Cache defaults
pub mod cache {
    /// Applications change rarely relative to an agent session
    pub const APPLICATIONS_TTL_SECS: u64 = 300;
    /// Library and class usage data per application
    pub const LIBRARIES_TTL_SECS: u64 = 600;
    /// Safety valve against unbounded growth, not an eviction policy
    pub const MAX_ENTRIES: usize = 500_000;
}

/// Upstream HTTP defaults
pub mod http {
    /// Request timeout for Contrast API calls
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
    /// Default scheme for the Contrast host
    pub const DEFAULT_PROTOCOL: &str = "https";
    /// Path prefix of the Contrast REST API
    pub const API_PATH: &str = "Contrast/api/ng";
}

/// MCP protocol constants
pub mod protocol {
    /// Protocol revision reported during initialization
    pub const MCP_PROTOCOL_VERSION: &str = "2024-11-05";
    /// Server name reported during initialization
    pub const SERVER_NAME: &str = "contrast-mcp-server";
}

/// User-facing messages shared by the pipelines
pub mod messages {
    /// Warning appended when a single-item tool finds nothing
    pub const RESOURCE_NOT_FOUND: &str = "Resource not found";
    /// Warning appended when a paginated tool's filters match nothing
    pub const NO_RESULTS: &str = "No results found matching the specified criteria.";
}
