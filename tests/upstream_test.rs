// ABOUTME: Tests for the reqwest Contrast client against a canned local HTTP responder
// ABOUTME: Verifies URL layout, auth headers and HTTP status classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(missing_docs, clippy::unwrap_used)]

use std::time::Duration;

use contrast_mcp_server::config::environment::ContrastConfig;
use contrast_mcp_server::upstream::{ContrastApi, HttpContrastClient, UpstreamError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const ORG_ID: &str = "0b1c2d3e-4f50-6172-8394-a5b6c7d8e9f0";
const APP_ID: &str = "550e8400-e29b-41d4-a716-446655440000";

/// Answer exactly one request with `status` and `body`, returning the request head
async fn respond_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap().to_string();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut received = Vec::new();
        let mut buffer = [0_u8; 1024];
        while !received.windows(4).any(|window| window == b"\r\n\r\n") {
            let read = socket.read(&mut buffer).await.unwrap();
            if read == 0 {
                break;
            }
            received.extend_from_slice(&buffer[..read]);
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        String::from_utf8_lossy(&received).into_owned()
    });

    (address, handle)
}

fn client_for(host: &str) -> HttpContrastClient {
    HttpContrastClient::new(&ContrastConfig {
        host_name: host.to_owned(),
        api_key: "api-key".to_owned(),
        service_key: "service-key".to_owned(),
        username: "agent@example.com".to_owned(),
        org_id: ORG_ID.to_owned(),
        protocol: "http".to_owned(),
        http_timeout: Duration::from_secs(5),
    })
    .unwrap()
}

#[tokio::test]
async fn test_list_applications_decodes_and_signs_request() {
    let (address, server) = respond_once(
        "200 OK",
        r#"{"applications":[{"app_id":"550e8400-e29b-41d4-a716-446655440000","name":"WebGoat","language":"Java"}]}"#,
    )
    .await;
    let client = client_for(&address);

    let applications = client.list_applications().await.unwrap();
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0].app_id, APP_ID);
    assert!(applications[0].tags.is_empty());

    let request = server.await.unwrap();
    let request_line = request.lines().next().unwrap();
    assert!(request_line.starts_with(&format!(
        "GET /Contrast/api/ng/{ORG_ID}/applications?expand=skip_links"
    )));
    let lowercase = request.to_lowercase();
    // base64("agent@example.com:service-key")
    assert!(lowercase.contains("authorization: ywdlbnrazxhhbxbszs5jb206c2vydmljzs1rzxk="));
    assert!(lowercase.contains("api-key: api-key"));
}

#[tokio::test]
async fn test_unauthorized_status_is_classified() {
    let (address, _server) = respond_once("401 Unauthorized", r#"{"messages":["bad key"]}"#).await;
    let error = client_for(&address).list_applications().await.unwrap_err();

    assert!(matches!(error, UpstreamError::Unauthorized(_)));
    assert_eq!(error.status_code(), Some(401));
}

#[tokio::test]
async fn test_server_error_keeps_status() {
    let (address, _server) = respond_once("503 Service Unavailable", "").await;
    let error = client_for(&address).list_applications().await.unwrap_err();

    assert_eq!(error.status_code(), Some(503));
    assert_eq!(
        error,
        UpstreamError::Http {
            status: 503,
            message: "Service Unavailable".to_owned(),
        }
    );
}

#[tokio::test]
async fn test_missing_vulnerability_is_absent() {
    let (address, _server) = respond_once("404 Not Found", "").await;
    let trace = client_for(&address)
        .get_vulnerability(APP_ID, "ABCD-1234")
        .await
        .unwrap();

    assert!(trace.is_none());
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let (address, _server) = respond_once("200 OK", "{\"applications\": 42}").await;
    let error = client_for(&address).list_applications().await.unwrap_err();

    assert!(matches!(error, UpstreamError::Decode(_)));
    assert_eq!(error.status_code(), None);
}

#[test]
fn test_status_classification() {
    assert!(matches!(
        UpstreamError::from_status(403, "nope"),
        UpstreamError::Forbidden(_)
    ));
    assert!(matches!(
        UpstreamError::from_status(404, "gone"),
        UpstreamError::NotFound(_)
    ));
    assert_eq!(UpstreamError::from_status(429, "slow").status_code(), Some(429));
    assert_eq!(UpstreamError::Io("reset".to_owned()).status_code(), None);
}
