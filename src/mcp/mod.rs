// ABOUTME: Model Context Protocol surface of the server
// ABOUTME: JSON schema types for tool inputs and the stdio JSON-RPC transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// JSON schema types advertised in `tools/list`
pub mod schema;

/// Line-delimited JSON-RPC 2.0 over stdin/stdout
pub mod stdio;

pub use stdio::StdioTransport;
