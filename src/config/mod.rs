// ABOUTME: Configuration module root
// ABOUTME: Environment-only configuration for the Contrast connection, caches and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment variable based server configuration
pub mod environment;
