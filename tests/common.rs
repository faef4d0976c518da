// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Provides a call-counting mock ContrastApi and model fixture builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `contrast_mcp_server`

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use contrast_mcp_server::cache::ServerCaches;
use contrast_mcp_server::context::ServerContext;
use contrast_mcp_server::models::{
    Application, Attack, AttackStatus, Library, LibraryObservation, MetadataItem,
    SessionMetadata, Severity, Trace, TraceStatus,
};
use contrast_mcp_server::tools::ToolArgs;
use contrast_mcp_server::upstream::{
    AttackFilter, ContrastApi, Page, TraceFilter, UpstreamError, UpstreamResult,
};
use serde_json::Value;

pub const ORG_ID: &str = "0b1c2d3e-4f50-6172-8394-a5b6c7d8e9f0";
pub const APP_ID: &str = "550e8400-e29b-41d4-a716-446655440000";
pub const OTHER_APP_ID: &str = "660e8400-e29b-41d4-a716-446655440000";

/// Per-method call counters
#[derive(Debug, Default)]
pub struct CallCounts {
    pub list_applications: AtomicUsize,
    pub list_vulnerabilities: AtomicUsize,
    pub get_vulnerability: AtomicUsize,
    pub list_application_libraries: AtomicUsize,
    pub list_library_observations: AtomicUsize,
    pub latest_session_metadata: AtomicUsize,
    pub search_attacks: AtomicUsize,
}

impl CallCounts {
    pub fn total(&self) -> usize {
        [
            &self.list_applications,
            &self.list_vulnerabilities,
            &self.get_vulnerability,
            &self.list_application_libraries,
            &self.list_library_observations,
            &self.latest_session_metadata,
            &self.search_attacks,
        ]
        .iter()
        .map(|counter| counter.load(Ordering::SeqCst))
        .sum()
    }
}

fn bump(counter: &AtomicUsize) {
    counter.fetch_add(1, Ordering::SeqCst);
}

fn window<T: Clone>(items: &[T], offset: Option<u64>, limit: Option<u32>) -> Page<T> {
    let total = items.len() as u64;
    let start = offset.unwrap_or(0) as usize;
    let taken: Vec<T> = items
        .iter()
        .skip(start)
        .take(limit.map_or(usize::MAX, |l| l as usize))
        .cloned()
        .collect();
    Page::new(taken, Some(total))
}

/// In-memory `ContrastApi` recording every call
#[derive(Debug, Default)]
pub struct MockContrastApi {
    pub applications: Mutex<Vec<Application>>,
    pub traces: Vec<Trace>,
    pub latest_session: Option<SessionMetadata>,
    pub libraries: Vec<Library>,
    pub observations: Vec<LibraryObservation>,
    pub attacks: Vec<Attack>,
    pub failure: Option<UpstreamError>,
    pub calls: CallCounts,
    pub trace_filters: Mutex<Vec<TraceFilter>>,
    pub attack_filters: Mutex<Vec<AttackFilter>>,
}

impl MockContrastApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_applications(self, applications: Vec<Application>) -> Self {
        *self.applications.lock().unwrap() = applications;
        self
    }

    pub fn with_traces(mut self, traces: Vec<Trace>) -> Self {
        self.traces = traces;
        self
    }

    pub fn with_latest_session(mut self, session: SessionMetadata) -> Self {
        self.latest_session = Some(session);
        self
    }

    pub fn with_libraries(mut self, libraries: Vec<Library>) -> Self {
        self.libraries = libraries;
        self
    }

    pub fn with_observations(mut self, observations: Vec<LibraryObservation>) -> Self {
        self.observations = observations;
        self
    }

    pub fn with_attacks(mut self, attacks: Vec<Attack>) -> Self {
        self.attacks = attacks;
        self
    }

    pub fn failing_with(mut self, error: UpstreamError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Simulate an application created after the cache was filled
    pub fn add_application(&self, application: Application) {
        self.applications.lock().unwrap().push(application);
    }

    pub fn last_trace_filter(&self) -> TraceFilter {
        self.trace_filters.lock().unwrap().last().cloned().unwrap()
    }

    pub fn last_attack_filter(&self) -> AttackFilter {
        self.attack_filters.lock().unwrap().last().cloned().unwrap()
    }

    fn check(&self) -> UpstreamResult<()> {
        self.failure.clone().map_or(Ok(()), Err)
    }
}

#[async_trait]
impl ContrastApi for MockContrastApi {
    fn org_id(&self) -> &str {
        ORG_ID
    }

    async fn list_applications(&self) -> UpstreamResult<Vec<Application>> {
        bump(&self.calls.list_applications);
        self.check()?;
        Ok(self.applications.lock().unwrap().clone())
    }

    async fn list_vulnerabilities(&self, filter: &TraceFilter) -> UpstreamResult<Page<Trace>> {
        bump(&self.calls.list_vulnerabilities);
        self.trace_filters.lock().unwrap().push(filter.clone());
        self.check()?;
        Ok(window(&self.traces, filter.offset, filter.limit))
    }

    async fn get_vulnerability(&self, _app_id: &str, vuln_id: &str) -> UpstreamResult<Option<Trace>> {
        bump(&self.calls.get_vulnerability);
        self.check()?;
        Ok(self.traces.iter().find(|t| t.uuid == vuln_id).cloned())
    }

    async fn list_application_libraries(&self, _app_id: &str) -> UpstreamResult<Vec<Library>> {
        bump(&self.calls.list_application_libraries);
        self.check()?;
        Ok(self.libraries.clone())
    }

    async fn list_library_observations(
        &self,
        _app_id: &str,
        _library_hash: &str,
    ) -> UpstreamResult<Vec<LibraryObservation>> {
        bump(&self.calls.list_library_observations);
        self.check()?;
        Ok(self.observations.clone())
    }

    async fn latest_session_metadata(&self, _app_id: &str) -> UpstreamResult<Option<SessionMetadata>> {
        bump(&self.calls.latest_session_metadata);
        self.check()?;
        Ok(self.latest_session.clone())
    }

    async fn search_attacks(&self, filter: &AttackFilter) -> UpstreamResult<Page<Attack>> {
        bump(&self.calls.search_attacks);
        self.attack_filters.lock().unwrap().push(filter.clone());
        self.check()?;
        Ok(window(&self.attacks, Some(filter.offset), Some(filter.limit)))
    }
}

/// Server context over a shared mock, with default caches
pub fn context_for(api: &Arc<MockContrastApi>) -> Arc<ServerContext> {
    Arc::new(ServerContext::new(
        api.clone(),
        Arc::new(ServerCaches::default()),
    ))
}

/// Tool arguments from a JSON literal
pub fn args(value: Value) -> ToolArgs {
    ToolArgs::from(value)
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn application(app_id: &str, name: &str) -> Application {
    Application {
        app_id: app_id.to_owned(),
        name: name.to_owned(),
        language: Some("Java".to_owned()),
        last_seen: None,
        tags: Vec::new(),
    }
}

pub fn session(agent_session_id: &str, items: &[(&str, &str)]) -> SessionMetadata {
    SessionMetadata {
        agent_session_id: agent_session_id.to_owned(),
        metadata: items
            .iter()
            .map(|(label, value)| MetadataItem {
                display_label: (*label).to_owned(),
                value: (*value).to_owned(),
            })
            .collect(),
    }
}

pub fn trace(uuid: &str, severity: Severity, sessions: Vec<SessionMetadata>) -> Trace {
    Trace {
        uuid: uuid.to_owned(),
        title: format!("Vulnerability {uuid}"),
        rule_name: "sql-injection".to_owned(),
        severity,
        status: TraceStatus::Reported,
        app_id: Some(APP_ID.to_owned()),
        first_time_seen: None,
        last_time_seen: None,
        tags: Vec::new(),
        session_metadata: sessions,
    }
}

pub fn library(hash: &str, file_name: &str) -> Library {
    Library {
        hash: hash.to_owned(),
        file_name: file_name.to_owned(),
        version: Some("1.0.0".to_owned()),
        grade: Some("B".to_owned()),
        class_count: 100,
        classes_used: 10,
        vulnerabilities: Vec::new(),
    }
}

pub fn observation(name: &str) -> LibraryObservation {
    LibraryObservation {
        name: name.to_owned(),
        first_observed: None,
        last_observed: None,
    }
}

pub fn attack(uuid: &str, status: AttackStatus) -> Attack {
    Attack {
        uuid: uuid.to_owned(),
        status,
        source_ip: Some("203.0.113.7".to_owned()),
        rules: vec!["sql-injection".to_owned()],
        probes: 3,
        start_time: None,
        end_time: None,
    }
}
