// ABOUTME: MCP transport speaking newline-delimited JSON-RPC 2.0 on stdin/stdout
// ABOUTME: Handles initialize, ping, tools/list and tools/call; logs go to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::constants::protocol::{MCP_PROTOCOL_VERSION, SERVER_NAME};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::tools::{ToolArgs, ToolRegistry};

/// Invalid JSON was received
pub const PARSE_ERROR: i32 = -32700;
/// The JSON is not a valid request object
pub const INVALID_REQUEST: i32 = -32600;
/// The method does not exist
pub const METHOD_NOT_FOUND: i32 = -32601;
/// Invalid method parameters, including an unknown tool
pub const INVALID_PARAMS: i32 = -32602;
/// Internal JSON-RPC error
pub const INTERNAL_ERROR: i32 = -32603;

#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    method: Option<String>,
    #[serde(default)]
    params: Option<Value>,
}

#[derive(Debug, Serialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

#[derive(Debug, Serialize)]
struct JsonRpcResponse {
    jsonrpc: &'static str,
    id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    const fn result(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    fn error(id: Value, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ToolCallParams {
    name: String,
    #[serde(default)]
    arguments: Value,
}

/// Serves a [`ToolRegistry`] over line-delimited JSON-RPC
pub struct StdioTransport {
    registry: Arc<ToolRegistry>,
}

impl StdioTransport {
    /// Transport over `registry`
    #[must_use]
    pub const fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// Serve process stdin/stdout until stdin closes
    ///
    /// # Errors
    ///
    /// Returns an error if reading stdin or writing stdout fails
    pub async fn run(&self) -> AppResult<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout).await
    }

    /// Serve any line-oriented reader and writer until the reader is exhausted
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!(tools = self.registry.len(), "MCP stdio transport started");
        let mut lines = reader.lines();

        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| AppError::internal(format!("Failed to read request: {e}")))?
        {
            let Some(response) = self.handle_line(&line).await else {
                continue;
            };
            let mut bytes = response.to_string().into_bytes();
            bytes.push(b'\n');
            writer
                .write_all(&bytes)
                .await
                .map_err(|e| AppError::internal(format!("Failed to write response: {e}")))?;
            writer
                .flush()
                .await
                .map_err(|e| AppError::internal(format!("Failed to flush response: {e}")))?;
        }

        info!("MCP stdio transport stopped");
        Ok(())
    }

    /// Handle one raw line. Blank lines and notifications produce no response.
    pub async fn handle_line(&self, line: &str) -> Option<Value> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Unparsable JSON-RPC message");
                return Some(encode(&JsonRpcResponse::error(
                    Value::Null,
                    PARSE_ERROR,
                    format!("Parse error: {e}"),
                )));
            }
        };

        // Notifications carry no id and expect no answer
        let id = request.id?;
        let Some(method) = request.method else {
            return Some(encode(&JsonRpcResponse::error(
                id,
                INVALID_REQUEST,
                "Invalid request: missing method",
            )));
        };
        debug!(method = %method, "JSON-RPC request");

        let response = match method.as_str() {
            "initialize" => JsonRpcResponse::result(id, initialize_result()),
            "ping" => JsonRpcResponse::result(id, json!({})),
            "tools/list" => JsonRpcResponse::result(
                id,
                json!({ "tools": self.registry.definitions() }),
            ),
            "tools/call" => self.call_tool(id, request.params).await,
            other => JsonRpcResponse::error(id, METHOD_NOT_FOUND, format!("Method not found: {other}")),
        };
        Some(encode(&response))
    }

    async fn call_tool(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let params: ToolCallParams = match params.map(serde_json::from_value).transpose() {
            Ok(Some(params)) => params,
            Ok(None) => {
                return JsonRpcResponse::error(id, INVALID_PARAMS, "Missing tool call parameters");
            }
            Err(e) => {
                return JsonRpcResponse::error(
                    id,
                    INVALID_PARAMS,
                    format!("Invalid tool call parameters: {e}"),
                );
            }
        };

        match self
            .registry
            .call(&params.name, ToolArgs::from(params.arguments))
            .await
        {
            Ok(result) => JsonRpcResponse::result(
                id,
                json!({
                    "content": [{ "type": "text", "text": result.content.to_string() }],
                    "structuredContent": result.content,
                    "isError": !result.success,
                }),
            ),
            Err(AppError {
                code: ErrorCode::ResourceNotFound,
                message,
            }) => JsonRpcResponse::error(id, INVALID_PARAMS, message),
            Err(error) => JsonRpcResponse::error(id, INTERNAL_ERROR, error.to_string()),
        }
    }
}

fn initialize_result() -> Value {
    json!({
        "protocolVersion": MCP_PROTOCOL_VERSION,
        "capabilities": { "tools": {} },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION"),
        },
    })
}

fn encode(response: &JsonRpcResponse) -> Value {
    serde_json::to_value(response).unwrap_or_else(|e| {
        json!({
            "jsonrpc": "2.0",
            "id": Value::Null,
            "error": { "code": INTERNAL_ERROR, "message": format!("Failed to encode response: {e}") },
        })
    })
}
