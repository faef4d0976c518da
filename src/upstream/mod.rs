// ABOUTME: Boundary between the tool framework and the Contrast REST API
// ABOUTME: Defines the ContrastApi trait, query filters and the upstream error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Contrast API Boundary
//!
//! Tools never issue HTTP requests themselves; they call a [`ContrastApi`].
//! The production implementation is [`HttpContrastClient`]; tests supply
//! in-memory fakes. The framework only relies on [`UpstreamError`] exposing
//! the HTTP status and distinguishing "not found" and "unauthorized".

mod client;
mod errors;
mod filters;

use async_trait::async_trait;

use crate::models::{Application, Attack, Library, LibraryObservation, SessionMetadata, Trace};

pub use client::HttpContrastClient;
pub use errors::{UpstreamError, UpstreamResult};
pub use filters::{AttackFilter, Page, TraceFilter};

/// Operations the tools need from the Contrast platform
#[async_trait]
pub trait ContrastApi: Send + Sync {
    /// Organization every call is scoped to
    fn org_id(&self) -> &str;

    /// Every application in the organization
    async fn list_applications(&self) -> UpstreamResult<Vec<Application>>;

    /// Vulnerabilities matching `filter`
    async fn list_vulnerabilities(&self, filter: &TraceFilter) -> UpstreamResult<Page<Trace>>;

    /// One vulnerability, `None` when it does not exist
    async fn get_vulnerability(&self, app_id: &str, vuln_id: &str)
        -> UpstreamResult<Option<Trace>>;

    /// Libraries loaded by an application
    async fn list_application_libraries(&self, app_id: &str) -> UpstreamResult<Vec<Library>>;

    /// Classes from one library observed in use
    async fn list_library_observations(
        &self,
        app_id: &str,
        library_hash: &str,
    ) -> UpstreamResult<Vec<LibraryObservation>>;

    /// Metadata of the most recent agent session, `None` when there is none
    async fn latest_session_metadata(&self, app_id: &str)
        -> UpstreamResult<Option<SessionMetadata>>;

    /// Attacks matching `filter`
    async fn search_attacks(&self, filter: &AttackFilter) -> UpstreamResult<Page<Attack>>;
}
