// ABOUTME: Stdio entry point for the Contrast MCP server
// ABOUTME: Loads environment configuration, initializes logging and serves tools over stdin/stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Contrast MCP Server
//!
//! ## Usage
//!
//! ```bash
//! export CONTRAST_HOST_NAME=app.contrastsecurity.com
//! export CONTRAST_API_KEY=... CONTRAST_SERVICE_KEY=... CONTRAST_USERNAME=... CONTRAST_ORG_ID=...
//!
//! # Serve MCP over stdio, logging to stderr
//! cargo run --bin contrast-mcp-server
//!
//! # Verbose, human readable logs
//! cargo run --bin contrast-mcp-server -- --log-level debug --log-format pretty
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use contrast_mcp_server::config::environment::ServerConfig;
use contrast_mcp_server::context::ServerContext;
use contrast_mcp_server::logging::{init_logging, LogFormat};
use contrast_mcp_server::mcp::StdioTransport;
use contrast_mcp_server::tools::ToolRegistry;

#[derive(Parser)]
#[command(
    name = "contrast-mcp-server",
    about = "Contrast Security MCP Server",
    long_about = "Expose the Contrast Security REST API as MCP tools over stdio"
)]
struct Args {
    /// Log filter override (e.g. `debug`, `contrast_mcp_server=trace`)
    #[arg(long)]
    log_level: Option<String>,

    /// Log format override: json, pretty or compact
    #[arg(long)]
    log_format: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env().context("Failed to load configuration")?;
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }
    if let Some(format) = args.log_format.as_deref() {
        config.logging.format = LogFormat::from_str_param(format);
    }

    init_logging(&config.logging).context("Failed to initialize logging")?;
    info!(
        host = %config.contrast.host_name,
        org_id = %config.contrast.org_id,
        "Starting Contrast MCP server"
    );

    let context = Arc::new(ServerContext::from_config(&config).context("Failed to build server context")?);
    let registry = ToolRegistry::with_contrast_tools(&context).context("Failed to register tools")?;

    StdioTransport::new(Arc::new(registry))
        .run()
        .await
        .context("MCP transport failed")?;
    Ok(())
}
