// ABOUTME: reqwest based implementation of the ContrastApi boundary
// ABOUTME: Builds org-scoped URLs, signs requests and maps HTTP statuses to UpstreamError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

use super::{AttackFilter, ContrastApi, Page, TraceFilter, UpstreamError, UpstreamResult};
use crate::config::environment::ContrastConfig;
use crate::constants::http::API_PATH;
use crate::errors::{AppError, AppResult};
use crate::models::{Application, Attack, Library, LibraryObservation, SessionMetadata, Trace};

/// Error bodies are truncated to keep log lines and messages short
const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Debug, Deserialize)]
struct ApplicationsResponse {
    #[serde(default)]
    applications: Vec<Application>,
}

#[derive(Debug, Deserialize)]
struct TracesResponse {
    #[serde(default)]
    traces: Vec<Trace>,
    #[serde(default)]
    count: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct TraceResponse {
    #[serde(default)]
    trace: Option<Trace>,
}

#[derive(Debug, Deserialize)]
struct LibrariesResponse {
    #[serde(default)]
    libraries: Vec<Library>,
}

#[derive(Debug, Deserialize)]
struct ObservationsResponse {
    #[serde(default)]
    observations: Vec<LibraryObservation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AgentSessionResponse {
    #[serde(default)]
    agent_session: Option<SessionMetadata>,
}

#[derive(Debug, Deserialize)]
struct AttacksResponse {
    #[serde(default)]
    attacks: Vec<Attack>,
    #[serde(default)]
    count: Option<u64>,
}

/// Contrast REST API client
pub struct HttpContrastClient {
    http: Client,
    base_url: Url,
    org_id: String,
    authorization: String,
    api_key: String,
}

impl HttpContrastClient {
    /// Build a client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the host does not form a valid URL or the HTTP
    /// client cannot be constructed
    pub fn new(config: &ContrastConfig) -> AppResult<Self> {
        let base_url = Url::parse(&format!(
            "{}://{}/{API_PATH}/",
            config.protocol, config.host_name
        ))
        .map_err(|e| AppError::config(format!("Invalid Contrast host '{}': {e}", config.host_name)))?;

        let http = Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            org_id: config.org_id.clone(),
            authorization: STANDARD.encode(format!("{}:{}", config.username, config.service_key)),
            api_key: config.api_key.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> UpstreamResult<Url> {
        self.base_url
            .join(&format!("{}/{path}", self.org_id))
            .map_err(|e| UpstreamError::Io(format!("Invalid request URL: {e}")))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> UpstreamResult<T> {
        let response = request
            .header("Authorization", &self.authorization)
            .header("API-Key", &self.api_key)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("request failed").to_owned()
            } else {
                body.chars().take(MAX_ERROR_BODY_CHARS).collect()
            };
            return Err(UpstreamError::from_status(status.as_u16(), message));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> UpstreamResult<T> {
        let url = self.endpoint(path)?;
        debug!(%url, "GET Contrast API");
        self.send(self.http.get(url).query(query)).await
    }

    async fn post<B, T>(&self, path: &str, query: &[(&str, String)], body: &B) -> UpstreamResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!(%url, "POST Contrast API");
        self.send(self.http.post(url).query(query).json(body)).await
    }
}

/// `offset`/`limit` query pairs, omitted when unset
fn window_query(offset: Option<u64>, limit: Option<u32>) -> Vec<(&'static str, String)> {
    let mut query = Vec::with_capacity(2);
    if let Some(offset) = offset {
        query.push(("offset", offset.to_string()));
    }
    if let Some(limit) = limit {
        query.push(("limit", limit.to_string()));
    }
    query
}

/// Treat a 404 as an absent resource
fn absent_on_not_found<T>(result: UpstreamResult<Option<T>>) -> UpstreamResult<Option<T>> {
    match result {
        Err(UpstreamError::NotFound(_)) => Ok(None),
        other => other,
    }
}

#[async_trait]
impl ContrastApi for HttpContrastClient {
    fn org_id(&self) -> &str {
        &self.org_id
    }

    #[instrument(skip(self))]
    async fn list_applications(&self) -> UpstreamResult<Vec<Application>> {
        let response: ApplicationsResponse = self
            .get("applications", &[("expand", "skip_links".to_owned())])
            .await?;
        Ok(response.applications)
    }

    #[instrument(skip(self, filter), fields(app_id = ?filter.app_id))]
    async fn list_vulnerabilities(&self, filter: &TraceFilter) -> UpstreamResult<Page<Trace>> {
        let path = filter
            .app_id
            .as_ref()
            .map_or_else(|| "orgtraces/filter".to_owned(), |app| format!("traces/{app}/filter"));
        let mut query = window_query(filter.offset, filter.limit);
        query.push(("expand", "session_metadata".to_owned()));

        let response: TracesResponse = self.post(&path, &query, filter).await?;
        Ok(Page::new(response.traces, response.count))
    }

    #[instrument(skip(self))]
    async fn get_vulnerability(&self, app_id: &str, vuln_id: &str) -> UpstreamResult<Option<Trace>> {
        let result = self
            .get::<TraceResponse>(
                &format!("traces/{app_id}/trace/{vuln_id}"),
                &[("expand", "session_metadata".to_owned())],
            )
            .await
            .map(|response| response.trace);
        absent_on_not_found(result)
    }

    #[instrument(skip(self))]
    async fn list_application_libraries(&self, app_id: &str) -> UpstreamResult<Vec<Library>> {
        let response: LibrariesResponse = self
            .get(
                &format!("applications/{app_id}/libraries"),
                &[("expand", "vulns".to_owned())],
            )
            .await?;
        Ok(response.libraries)
    }

    #[instrument(skip(self))]
    async fn list_library_observations(
        &self,
        app_id: &str,
        library_hash: &str,
    ) -> UpstreamResult<Vec<LibraryObservation>> {
        let response: ObservationsResponse = self
            .get(
                &format!("applications/{app_id}/libraries/{library_hash}/observations"),
                &[],
            )
            .await?;
        Ok(response.observations)
    }

    #[instrument(skip(self))]
    async fn latest_session_metadata(&self, app_id: &str) -> UpstreamResult<Option<SessionMetadata>> {
        let result = self
            .get::<AgentSessionResponse>(&format!("agent-sessions/{app_id}/latest"), &[])
            .await
            .map(|response| response.agent_session);
        absent_on_not_found(result)
    }

    #[instrument(skip(self, filter))]
    async fn search_attacks(&self, filter: &AttackFilter) -> UpstreamResult<Page<Attack>> {
        let mut query = window_query(Some(filter.offset), Some(filter.limit));
        if let Some(sort) = &filter.sort {
            query.push(("sort", sort.clone()));
        }

        let response: AttacksResponse = self.post("attacks", &query, filter).await?;
        Ok(Page::new(response.attacks, response.count))
    }
}
